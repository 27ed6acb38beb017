//! Match phases of the recognition state machine.
//!
//! The phase describes where the current attempt stands relative to the
//! active requirement. Phases are plain values; the transition logic that
//! moves between them lives in the matcher and the recognizer.

use serde::{Deserialize, Serialize};

/// Position of the current attempt within the recognition state machine.
///
/// `Invalid` is transient: the recognizer resets the buffer in the same
/// tick that produces it, so an observer polling between ticks only ever
/// sees the other three phases.
///
/// # Example
///
/// ```rust
/// use comborec::core::MatchPhase;
///
/// assert_eq!(MatchPhase::Matching.name(), "Matching");
/// assert!(MatchPhase::Complete.is_complete());
/// assert!(!MatchPhase::Empty.is_complete());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No symbols buffered
    #[default]
    Empty,

    /// Every buffered symbol agrees with the requirement prefix
    Matching,

    /// Mismatch or overflow detected; resolves to `Empty` within the tick
    Invalid,

    /// Buffer covers the full requirement and names a catalog entry
    Complete,
}

impl MatchPhase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::Matching => "Matching",
            Self::Invalid => "Invalid",
            Self::Complete => "Complete",
        }
    }

    /// Check whether this phase marks a fully recognized combo.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}
