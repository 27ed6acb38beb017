//! Recognition event history.
//!
//! The engine never throws for mismatches or unknown sequences; those are
//! ordinary branches of the per-tick algorithm. What it does instead is
//! record every discrete occurrence here, giving hosts a structured,
//! non-fatal diagnostic channel they can inspect, serialize, or drain.

use super::symbol::{Sequence, Symbol};
use super::trigger::TriggerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A discrete occurrence inside the recognition engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RecognitionEvent {
    /// A symbol was appended to the input buffer
    SymbolBuffered { symbol: Symbol },

    /// A buffered symbol disagreed with the active requirement
    Mismatch {
        at: usize,
        expected: Symbol,
        found: Symbol,
    },

    /// The buffer outgrew the active requirement
    Overflow { length: usize, limit: usize },

    /// The full buffer named no catalog entry (non-fatal; buffering continues)
    UnknownSequence { buffer: Sequence },

    /// A full catalog match fired its trigger
    Dispatched { combo: Sequence, trigger: TriggerId },

    /// The queue front was popped by an external decision
    QueueAdvanced { popped: Option<Sequence> },

    /// An external override replaced the active requirement
    OverrideSet { requirement: Sequence },

    /// The override was cleared
    OverrideCleared,

    /// Recognition state was explicitly reset
    Cleared,

    /// The terminal event fired its fan-out
    Terminal { trigger: TriggerId },
}

impl RecognitionEvent {
    /// Get the event's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::SymbolBuffered { .. } => "SymbolBuffered",
            Self::Mismatch { .. } => "Mismatch",
            Self::Overflow { .. } => "Overflow",
            Self::UnknownSequence { .. } => "UnknownSequence",
            Self::Dispatched { .. } => "Dispatched",
            Self::QueueAdvanced { .. } => "QueueAdvanced",
            Self::OverrideSet { .. } => "OverrideSet",
            Self::OverrideCleared => "OverrideCleared",
            Self::Cleared => "Cleared",
            Self::Terminal { .. } => "Terminal",
        }
    }

    /// Check whether this event represents a buffer reset.
    pub fn is_reset(&self) -> bool {
        matches!(
            self,
            Self::Mismatch { .. } | Self::Overflow { .. } | Self::Cleared
        )
    }
}

/// Timestamped record of a single event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecognitionRecord {
    /// What happened
    pub event: RecognitionEvent,
    /// When it happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of recognition events.
///
/// History is immutable - `record` returns a new history with the event
/// added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use comborec::core::{RecognitionEvent, RecognitionHistory, Symbol};
///
/// let history = RecognitionHistory::new();
/// let history = history.record(RecognitionEvent::SymbolBuffered {
///     symbol: Symbol::Up,
/// });
///
/// assert_eq!(history.records().len(), 1);
/// assert_eq!(history.records()[0].event.name(), "SymbolBuffered");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecognitionHistory {
    records: Vec<RecognitionRecord>,
}

impl RecognitionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an event at the current time, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record added.
    pub fn record(&self, event: RecognitionEvent) -> Self {
        let mut records = self.records.clone();
        records.push(RecognitionRecord {
            event,
            timestamp: Utc::now(),
        });
        Self { records }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[RecognitionRecord] {
        &self.records
    }

    /// The most recent dispatch, if any combo has fired.
    pub fn last_dispatch(&self) -> Option<(&Sequence, &TriggerId)> {
        self.records.iter().rev().find_map(|r| match &r.event {
            RecognitionEvent::Dispatched { combo, trigger } => Some((combo, trigger)),
            _ => None,
        })
    }

    /// Count events that reset the input buffer.
    pub fn reset_count(&self) -> usize {
        self.records.iter().filter(|r| r.event.is_reset()).count()
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
