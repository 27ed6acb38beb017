//! Prefix validation of the input buffer against the active requirement.
//!
//! The check itself is a pure function over two sequences; applying its
//! verdict (resetting the buffer, driving the highlighter) is the
//! recognizer's job. This keeps the matching rule directly unit-testable.

use crate::core::{MatchPhase, Sequence, Symbol};
use serde::{Deserialize, Serialize};

/// Raw input symbols accumulated since the last reset.
///
/// Append-only except for full resets to empty: there is no "rewind to a
/// shorter prefix". A single wrong keystroke costs the whole attempt.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputBuffer {
    symbols: Sequence,
}

impl InputBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            symbols: Sequence::new(),
        }
    }

    /// Append one symbol.
    pub fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Reset the buffer to empty.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    /// Number of buffered symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// View the buffered symbols as a sequence.
    pub fn sequence(&self) -> &Sequence {
        &self.symbols
    }
}

/// Why a buffer was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MismatchKind {
    /// The symbol at `PrefixCheck::Reject::at` disagrees with the requirement
    WrongSymbol { expected: Symbol, found: Symbol },

    /// The buffer is longer than the requirement; overflow is itself a mismatch
    Overflow { length: usize, limit: usize },
}

/// Verdict of one prefix-validation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixCheck {
    /// Buffer is empty; nothing to compare
    NothingTyped,

    /// Every typed symbol agrees with the requirement prefix.
    /// `confirmed` symbols deserve a highlight (indices `0..confirmed`).
    Advance { confirmed: usize },

    /// The attempt is invalid; the caller must reset the buffer and clear
    /// the first `requirement.len()` highlights
    Reject { at: usize, kind: MismatchKind },
}

impl PrefixCheck {
    /// The match phase this verdict corresponds to, given the requirement
    /// length and whether the full buffer names a catalog entry.
    pub fn phase(&self, requirement_len: usize, catalog_hit: bool) -> MatchPhase {
        match self {
            Self::NothingTyped => MatchPhase::Empty,
            Self::Advance { confirmed } if *confirmed == requirement_len && catalog_hit => {
                MatchPhase::Complete
            }
            Self::Advance { .. } => MatchPhase::Matching,
            Self::Reject { .. } => MatchPhase::Invalid,
        }
    }
}

/// Compare the buffer against the requirement symbol-by-symbol,
/// short-circuiting on the first failure.
///
/// For each index `i` in `0..requirement.len()` with `buffer.len() > i`:
/// an unequal symbol, or a buffer longer than the requirement, rejects the
/// whole attempt immediately; an equal symbol confirms index `i`. Indices
/// the buffer has not reached yet are skipped. Overflow is detected on the
/// first compared index, so even an overlong buffer whose prefix agrees is
/// rejected.
///
/// # Example
///
/// ```rust
/// use comborec::matcher::{check_prefix, PrefixCheck};
///
/// let requirement = "WSW".parse().unwrap();
///
/// let partial = "WS".parse().unwrap();
/// assert_eq!(
///     check_prefix(&partial, &requirement),
///     PrefixCheck::Advance { confirmed: 2 }
/// );
///
/// let wrong = "WW".parse().unwrap();
/// assert!(matches!(
///     check_prefix(&wrong, &requirement),
///     PrefixCheck::Reject { at: 1, .. }
/// ));
/// ```
pub fn check_prefix(buffer: &Sequence, requirement: &Sequence) -> PrefixCheck {
    if buffer.is_empty() {
        return PrefixCheck::NothingTyped;
    }

    let mut confirmed = 0;
    for (i, &expected) in requirement.symbols().iter().enumerate() {
        let Some(found) = buffer.get(i) else {
            // Not yet typed; no comparison for this index.
            break;
        };

        if buffer.len() > requirement.len() {
            return PrefixCheck::Reject {
                at: i,
                kind: MismatchKind::Overflow {
                    length: buffer.len(),
                    limit: requirement.len(),
                },
            };
        }

        if expected != found {
            return PrefixCheck::Reject {
                at: i,
                kind: MismatchKind::WrongSymbol { expected, found },
            };
        }

        confirmed += 1;
    }

    PrefixCheck::Advance { confirmed }
}
