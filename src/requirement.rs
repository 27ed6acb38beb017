//! Active requirement resolution.
//!
//! Each tick the recognizer asks the resolver which sequence is currently
//! being demanded. The answer is re-derived fresh every time - never cached
//! across ticks - so queue mutations and overrides take effect immediately
//! regardless of whether the host applies them before or after the
//! recognition step of the frame.

use crate::core::{ComboQueue, Sequence};
use serde::{Deserialize, Serialize};

/// Decides the active requirement each tick.
///
/// Precedence: a pending override wins over the queue front; the queue
/// front wins over whatever was resolved previously. With an empty queue
/// and no override, the last resolved requirement stays in force - the
/// requirement does not vanish just because its queue slot was popped.
///
/// An override persists until [`clear_override`](Self::clear_override) or
/// until the recognizer observes a successful completion of the override
/// sequence itself. It never pops the queue.
///
/// # Example
///
/// ```rust
/// use comborec::requirement::RequirementResolver;
///
/// let mut resolver = RequirementResolver::new();
/// resolver.queue_mut().enqueue("AA".parse().unwrap());
/// assert_eq!(resolver.resolve().unwrap().to_string(), "AA");
///
/// resolver.set_override("DD".parse().unwrap());
/// assert_eq!(resolver.resolve().unwrap().to_string(), "DD");
///
/// resolver.clear_override();
/// assert_eq!(resolver.resolve().unwrap().to_string(), "AA");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RequirementResolver {
    queue: ComboQueue,
    override_requirement: Option<Sequence>,
    current: Option<Sequence>,
}

impl RequirementResolver {
    /// Create a resolver with an empty queue and no override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver over an existing queue.
    pub fn with_queue(queue: ComboQueue) -> Self {
        Self {
            queue,
            override_requirement: None,
            current: None,
        }
    }

    /// Resolve the active requirement for this tick.
    ///
    /// An empty resolved sequence (or none at all) disables matching for
    /// the tick; the recognizer performs no comparison and no reset.
    pub fn resolve(&mut self) -> Option<&Sequence> {
        if let Some(requirement) = &self.override_requirement {
            self.current = Some(requirement.clone());
        } else if let Some(front) = self.queue.front() {
            self.current = Some(front.clone());
        }
        self.current.as_ref()
    }

    /// The requirement as of the last `resolve`, without re-deriving it.
    pub fn active(&self) -> Option<&Sequence> {
        self.current.as_ref()
    }

    /// Replace the active requirement, independent of queue state.
    pub fn set_override(&mut self, requirement: Sequence) {
        self.override_requirement = Some(requirement);
    }

    /// Drop the override, if any. Returns whether one was pending.
    pub fn clear_override(&mut self) -> bool {
        self.override_requirement.take().is_some()
    }

    /// The pending override, if any.
    pub fn override_requirement(&self) -> Option<&Sequence> {
        self.override_requirement.as_ref()
    }

    /// The underlying queue.
    pub fn queue(&self) -> &ComboQueue {
        &self.queue
    }

    /// Mutable access to the underlying queue.
    pub fn queue_mut(&mut self) -> &mut ComboQueue {
        &mut self.queue
    }
}
