//! Action trigger identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier handed to the action dispatcher to activate an animated
/// action.
///
/// Trigger ids are opaque to the engine; the dispatcher gives them meaning.
///
/// # Example
///
/// ```rust
/// use comborec::core::TriggerId;
///
/// let id = TriggerId::from("DoubleUp");
/// assert_eq!(id.as_str(), "DoubleUp");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(String);

impl TriggerId {
    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TriggerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TriggerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
