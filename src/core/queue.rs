//! Ordered queue of upcoming combo requirements.

use super::symbol::Sequence;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered sequence of required combos; the front is the current
/// requirement.
///
/// Entries are not checked against any catalog at enqueue time: an unknown
/// requirement simply can never complete and stalls its slot until an
/// external `advance` decision pops it.
///
/// # Example
///
/// ```rust
/// use comborec::core::ComboQueue;
///
/// let mut queue = ComboQueue::new();
/// assert!(queue.is_empty());
///
/// queue.enqueue("WW".parse().unwrap());
/// queue.enqueue("SS".parse().unwrap());
/// assert_eq!(queue.front().unwrap().to_string(), "WW");
///
/// let popped = queue.pop_front().unwrap();
/// assert_eq!(popped.to_string(), "WW");
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ComboQueue {
    entries: VecDeque<Sequence>,
}

impl ComboQueue {
    /// Create an empty queue. An empty queue is valid: it mandates no combo.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Append a requirement to the back of the queue.
    pub fn enqueue(&mut self, requirement: Sequence) {
        self.entries.push_back(requirement);
    }

    /// Remove and return the front requirement.
    ///
    /// A no-op returning `None` when the queue is empty.
    pub fn pop_front(&mut self) -> Option<Sequence> {
        self.entries.pop_front()
    }

    /// Peek at the current requirement.
    pub fn front(&self) -> Option<&Sequence> {
        self.entries.front()
    }

    /// Number of queued requirements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over queued requirements, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.entries.iter()
    }
}
