//! Builder API for constructing recognizers.
//!
//! Every collaborator is required: the recognizer fails fast at
//! construction rather than degrading into silent no-op dispatches later.

pub mod error;

pub use error::BuildError;

use crate::catalog::ComboCatalog;
use crate::core::{ComboQueue, Sequence, TriggerId};
use crate::recognizer::collaborators::{
    ActionDispatcher, CameraRig, SpeedController, SymbolHighlighter,
};
use crate::recognizer::ComboRecognizer;
use crate::requirement::RequirementResolver;

/// Default trigger fired by the terminal event handler.
pub const DEFAULT_TERMINAL_TRIGGER: &str = "Die";

/// Builder for constructing a [`ComboRecognizer`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use comborec::builder::RecognizerBuilder;
/// use comborec::catalog::ComboCatalog;
/// use comborec::recognizer::collaborators::{
///     ActionDispatcher, CameraRig, SpeedController, SymbolHighlighter,
/// };
/// use comborec::core::TriggerId;
///
/// struct NoFeedback;
/// impl SymbolHighlighter for NoFeedback {
///     fn highlight(&mut self, _index: usize) {}
///     fn reset_highlights(&mut self, _count: usize) {}
/// }
/// impl ActionDispatcher for NoFeedback {
///     fn activate(&mut self, _id: &TriggerId) {}
///     fn reset_trigger(&mut self, _id: &TriggerId) {}
/// }
/// impl SpeedController for NoFeedback {
///     fn set_speed(&mut self, _value: f32) {}
/// }
/// impl CameraRig for NoFeedback {
///     fn set_following(&mut self, _following: bool) {}
/// }
///
/// let catalog = ComboCatalog::from_entries([("WW", "DoubleUp")]).unwrap();
/// let recognizer = RecognizerBuilder::new()
///     .catalog(catalog)
///     .highlighter(NoFeedback)
///     .dispatcher(NoFeedback)
///     .speed_controller(NoFeedback)
///     .camera(NoFeedback)
///     .combo("WW".parse().unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(recognizer.queue().len(), 1);
/// ```
#[derive(Default)]
pub struct RecognizerBuilder {
    catalog: Option<ComboCatalog>,
    highlighter: Option<Box<dyn SymbolHighlighter>>,
    dispatcher: Option<Box<dyn ActionDispatcher>>,
    speed: Option<Box<dyn SpeedController>>,
    camera: Option<Box<dyn CameraRig>>,
    terminal_trigger: Option<TriggerId>,
    initial_combos: Vec<Sequence>,
}

impl RecognizerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the immutable combo catalog (required).
    pub fn catalog(mut self, catalog: ComboCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the feedback collaborator (required).
    pub fn highlighter(mut self, highlighter: impl SymbolHighlighter + 'static) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }

    /// Set the action dispatcher collaborator (required).
    pub fn dispatcher(mut self, dispatcher: impl ActionDispatcher + 'static) -> Self {
        self.dispatcher = Some(Box::new(dispatcher));
        self
    }

    /// Set the movement-speed collaborator (required).
    pub fn speed_controller(mut self, speed: impl SpeedController + 'static) -> Self {
        self.speed = Some(Box::new(speed));
        self
    }

    /// Set the camera-follow collaborator (required).
    pub fn camera(mut self, camera: impl CameraRig + 'static) -> Self {
        self.camera = Some(Box::new(camera));
        self
    }

    /// Override the trigger fired by the terminal event
    /// (default: [`DEFAULT_TERMINAL_TRIGGER`]).
    pub fn terminal_trigger(mut self, trigger: impl Into<TriggerId>) -> Self {
        self.terminal_trigger = Some(trigger.into());
        self
    }

    /// Queue one requirement at construction time.
    pub fn combo(mut self, requirement: Sequence) -> Self {
        self.initial_combos.push(requirement);
        self
    }

    /// Queue multiple requirements at construction time, in order.
    pub fn combos(mut self, requirements: impl IntoIterator<Item = Sequence>) -> Self {
        self.initial_combos.extend(requirements);
        self
    }

    /// Build the recognizer.
    /// Returns an error naming the first missing required piece.
    pub fn build(self) -> Result<ComboRecognizer, BuildError> {
        let catalog = self.catalog.ok_or(BuildError::MissingCatalog)?;
        let highlighter = self.highlighter.ok_or(BuildError::MissingHighlighter)?;
        let dispatcher = self.dispatcher.ok_or(BuildError::MissingDispatcher)?;
        let speed = self.speed.ok_or(BuildError::MissingSpeedController)?;
        let camera = self.camera.ok_or(BuildError::MissingCamera)?;

        let mut queue = ComboQueue::new();
        for requirement in self.initial_combos {
            queue.enqueue(requirement);
        }

        let terminal_trigger = self
            .terminal_trigger
            .unwrap_or_else(|| TriggerId::from(DEFAULT_TERMINAL_TRIGGER));

        Ok(ComboRecognizer::new(
            catalog,
            RequirementResolver::with_queue(queue),
            highlighter,
            dispatcher,
            speed,
            camera,
            terminal_trigger,
        ))
    }
}
