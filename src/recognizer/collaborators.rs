//! External collaborator interfaces.
//!
//! The engine owns recognition; everything user-visible that happens as a
//! consequence - feedback glyphs, animation triggers, level speed, camera
//! behavior - belongs to the host and is reached through these traits.
//! All calls are synchronous within the tick; the recognizer owns its
//! collaborators exclusively and never shares them across threads.

use crate::core::TriggerId;

/// Renders per-symbol feedback for the displayed requirement.
pub trait SymbolHighlighter {
    /// Mark one character position as confirmed correct.
    ///
    /// `index` is 0-based and always within the bounds of the currently
    /// displayed requirement. May be called repeatedly for the same index
    /// across ticks; implementations should treat it as idempotent.
    fn highlight(&mut self, index: usize);

    /// Clear the first `count` positions back to the neutral state.
    fn reset_highlights(&mut self, count: usize);
}

/// Plays animated actions bound to trigger identifiers.
pub trait ActionDispatcher {
    /// Activate the action bound to a trigger.
    fn activate(&mut self, id: &TriggerId);

    /// Deactivate a previously known trigger.
    ///
    /// The recognizer resets every catalog trigger before each activation,
    /// so at most one combo-driven action is logically active at a time.
    fn reset_trigger(&mut self, id: &TriggerId);
}

/// Controls the actor's movement speed. Signaled during the terminal event.
pub trait SpeedController {
    fn set_speed(&mut self, value: f32);
}

/// Controls camera-follow behavior. Signaled during the terminal event.
pub trait CameraRig {
    fn set_following(&mut self, following: bool);
}
