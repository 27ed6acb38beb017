//! Comborec: a frame-driven combo recognition engine
//!
//! Comborec follows the "pure core, imperative shell" philosophy. The
//! matching rule is a pure function over symbol sequences; side effects -
//! feedback glyphs, animation triggers, speed and camera changes - are
//! isolated behind collaborator traits and only touched by the recognizer
//! shell, once per tick.
//!
//! # Core Concepts
//!
//! - **Symbol**: one discrete directional input unit (`W`, `S`, `A`, `D`)
//! - **Sequence**: an ordered run of symbols; catalog keys, queue entries,
//!   requirements, and the input buffer are all sequences
//! - **Catalog**: immutable mapping from sequences to action triggers,
//!   validated as a whole at construction
//! - **Requirement**: the sequence currently demanded - the queue front,
//!   unless an external override is pending
//! - **Recognizer**: the per-actor tick loop tying it all together
//!
//! # Example
//!
//! ```rust
//! use comborec::builder::RecognizerBuilder;
//! use comborec::combo_catalog;
//! use comborec::core::{Symbol, TriggerId};
//! use comborec::recognizer::collaborators::{
//!     ActionDispatcher, CameraRig, SpeedController, SymbolHighlighter,
//! };
//!
//! struct Console;
//!
//! impl SymbolHighlighter for Console {
//!     fn highlight(&mut self, index: usize) {
//!         println!("confirmed symbol {index}");
//!     }
//!     fn reset_highlights(&mut self, count: usize) {
//!         println!("cleared {count} symbols");
//!     }
//! }
//!
//! impl ActionDispatcher for Console {
//!     fn activate(&mut self, id: &TriggerId) {
//!         println!("playing {id}");
//!     }
//!     fn reset_trigger(&mut self, _id: &TriggerId) {}
//! }
//!
//! impl SpeedController for Console {
//!     fn set_speed(&mut self, _value: f32) {}
//! }
//!
//! impl CameraRig for Console {
//!     fn set_following(&mut self, _following: bool) {}
//! }
//!
//! let catalog = combo_catalog! {
//!     "WW" => "DoubleUp",
//! }
//! .unwrap();
//!
//! let mut recognizer = RecognizerBuilder::new()
//!     .catalog(catalog)
//!     .highlighter(Console)
//!     .dispatcher(Console)
//!     .speed_controller(Console)
//!     .camera(Console)
//!     .combo("WW".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! recognizer.tick(&[Symbol::Up]);
//! recognizer.tick(&[Symbol::Up]);
//!
//! assert_eq!(
//!     recognizer.last_performed_combo().unwrap().to_string(),
//!     "WW"
//! );
//! ```

pub mod builder;
pub mod catalog;
pub mod core;
pub mod macros;
pub mod matcher;
pub mod recognizer;
pub mod requirement;

// Re-export commonly used types
pub use builder::RecognizerBuilder;
pub use catalog::ComboCatalog;
pub use core::{MatchPhase, Sequence, Symbol, TriggerId};
pub use recognizer::ComboRecognizer;
