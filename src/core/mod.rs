//! Core value types of the recognition engine.
//!
//! This module contains the pure functional core:
//! - Directional symbols and sequences
//! - Match phases
//! - The requirement queue
//! - Immutable event history tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod history;
mod phase;
mod queue;
mod symbol;
mod trigger;

pub use history::{RecognitionEvent, RecognitionHistory, RecognitionRecord};
pub use phase::MatchPhase;
pub use queue::ComboQueue;
pub use symbol::{in_poll_order, ParseSequenceError, Sequence, Symbol};
pub use trigger::TriggerId;
