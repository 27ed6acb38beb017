//! Static combo catalog: sequence keys mapped to action triggers.
//!
//! The catalog is constructed once, validated as a whole, and injected into
//! the recognizer; it is immutable thereafter and there is no module-level
//! singleton. Validation uses Stillwater's `Validation` type to accumulate
//! ALL definition problems instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use comborec::catalog::ComboCatalog;
//!
//! let catalog = ComboCatalog::from_entries([
//!     ("WW", "DoubleUp"),
//!     ("WS", "Duck"),
//! ])
//! .unwrap();
//!
//! let key = "WW".parse().unwrap();
//! assert_eq!(catalog.lookup(&key).unwrap().as_str(), "DoubleUp");
//! ```

pub mod violations;

pub use violations::{CatalogError, CatalogViolation};

use crate::core::{Sequence, TriggerId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Immutable mapping from symbol sequences to action-trigger identifiers.
///
/// Lookup is exact-match only: no partial or fuzzy matching. An unknown
/// sequence returns `None`, which the recognizer treats as "keep buffering",
/// not as a failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComboCatalog {
    entries: HashMap<Sequence, TriggerId>,
}

impl ComboCatalog {
    /// Look up the trigger bound to an exact sequence.
    pub fn lookup(&self, sequence: &Sequence) -> Option<&TriggerId> {
        self.entries.get(sequence)
    }

    /// Iterate over every known trigger identifier.
    ///
    /// The recognizer resets each of these before activating a new one, so
    /// a previous combo's action never lingers alongside the next.
    pub fn trigger_ids(&self) -> impl Iterator<Item = &TriggerId> {
        self.entries.values()
    }

    /// Iterate over all `(sequence, trigger)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&Sequence, &TriggerId)> {
        self.entries.iter()
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a catalog from `(key, trigger)` pairs, rejecting the whole
    /// definition if any entry is invalid.
    ///
    /// The error lists every violation found, not just the first.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut builder = CatalogBuilder::new();
        for (key, trigger) in entries {
            builder = builder.entry(key, trigger);
        }
        match builder.build() {
            Validation::Success(catalog) => Ok(catalog),
            Validation::Failure(errors) => {
                Err(CatalogError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Build a catalog from a JSON object of `"key": "trigger"` pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use comborec::catalog::ComboCatalog;
    ///
    /// let catalog = ComboCatalog::from_json(r#"{"SS": "Slide", "WW": "DoubleUp"}"#).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        // BTreeMap keeps violation reporting order deterministic.
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }
}

/// Builder collecting raw catalog entries for whole-definition validation.
///
/// `build` returns a `Validation` that accumulates ALL violations:
/// unparseable keys, empty keys, duplicate keys, and empty trigger ids.
///
/// # Example
///
/// ```rust
/// use comborec::catalog::CatalogBuilder;
/// use stillwater::validation::Validation;
///
/// let result = CatalogBuilder::new()
///     .entry("WW", "DoubleUp")
///     .entry("V-Pose", "Pose")
///     .entry("WW", "Again")
///     .entry("SS", "")
///     .build();
///
/// match result {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 3),
///     Validation::Success(_) => panic!("Expected violations"),
/// }
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    raw: Vec<(String, String)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self { raw: Vec::new() }
    }

    /// Add one `key -> trigger` entry. Nothing is validated until `build`.
    pub fn entry(mut self, key: impl Into<String>, trigger: impl Into<String>) -> Self {
        self.raw.push((key.into(), trigger.into()));
        self
    }

    /// Validate every entry, accumulating ALL violations.
    pub fn build(self) -> Validation<ComboCatalog, NonEmptyVec<CatalogViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<CatalogViolation>>> = Vec::new();
        let mut entries: HashMap<Sequence, TriggerId> = HashMap::new();

        for (key, trigger) in &self.raw {
            if key.is_empty() {
                checks.push(Validation::fail(CatalogViolation::EmptyKey));
                continue;
            }

            let sequence = match key.parse::<Sequence>() {
                Ok(sequence) => sequence,
                Err(e) => {
                    checks.push(Validation::fail(CatalogViolation::UnparseableKey {
                        key: key.clone(),
                        character: e.character,
                        position: e.position,
                    }));
                    continue;
                }
            };

            if trigger.is_empty() {
                checks.push(Validation::fail(CatalogViolation::EmptyTrigger {
                    key: key.clone(),
                }));
                continue;
            }

            if entries.contains_key(&sequence) {
                checks.push(Validation::fail(CatalogViolation::DuplicateKey {
                    key: key.clone(),
                }));
                continue;
            }

            entries.insert(sequence, TriggerId::from(trigger.clone()));
            checks.push(Validation::success(()));
        }

        // Accumulate ALL failures using all_vec
        Validation::all_vec(checks).map(move |_| ComboCatalog { entries })
    }
}
