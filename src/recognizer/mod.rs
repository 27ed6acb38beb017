//! The combo recognizer: imperative shell around the pure matching core.
//!
//! One recognizer per actor. The host loop calls [`ComboRecognizer::tick`]
//! once per frame with the symbols decoded for that frame; everything else
//! happens synchronously inside the call. Construction goes through
//! [`RecognizerBuilder`](crate::builder::RecognizerBuilder), which refuses
//! to build without the full set of collaborators.

pub mod collaborators;

pub use collaborators::{ActionDispatcher, CameraRig, SpeedController, SymbolHighlighter};

use crate::catalog::ComboCatalog;
use crate::core::{
    in_poll_order, ComboQueue, MatchPhase, RecognitionEvent, RecognitionHistory, Sequence, Symbol,
    TriggerId,
};
use crate::matcher::{check_prefix, InputBuffer, MismatchKind, PrefixCheck};
use crate::requirement::RequirementResolver;

/// Per-frame combo recognition state machine.
///
/// Ties the catalog, queue, resolver, buffer, and matcher together once per
/// tick: resolve the active requirement, validate the buffer against it,
/// feed new symbols through the catalog, and dispatch triggers on full
/// matches. See the crate docs for a worked example.
pub struct ComboRecognizer {
    catalog: ComboCatalog,
    resolver: RequirementResolver,
    buffer: InputBuffer,
    last_valid: Option<Sequence>,
    active_trigger: Option<TriggerId>,
    phase: MatchPhase,
    history: RecognitionHistory,
    highlighter: Box<dyn SymbolHighlighter>,
    dispatcher: Box<dyn ActionDispatcher>,
    speed: Box<dyn SpeedController>,
    camera: Box<dyn CameraRig>,
    terminal_trigger: TriggerId,
}

impl ComboRecognizer {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        catalog: ComboCatalog,
        resolver: RequirementResolver,
        highlighter: Box<dyn SymbolHighlighter>,
        dispatcher: Box<dyn ActionDispatcher>,
        speed: Box<dyn SpeedController>,
        camera: Box<dyn CameraRig>,
        terminal_trigger: TriggerId,
    ) -> Self {
        Self {
            catalog,
            resolver,
            buffer: InputBuffer::new(),
            last_valid: None,
            active_trigger: None,
            phase: MatchPhase::Empty,
            history: RecognitionHistory::new(),
            highlighter,
            dispatcher,
            speed,
            camera,
            terminal_trigger,
        }
    }

    /// Advance the machine by one frame.
    ///
    /// `inputs` holds the symbols decoded for this tick, at most one per
    /// discrete key-down edge per key, already arranged in the fixed
    /// polling order (see [`tick_pressed`](Self::tick_pressed) for a
    /// variant that arranges them for you).
    ///
    /// Order within the tick:
    /// 1. resolve the active requirement (re-read fresh, never cached);
    /// 2. if it is non-empty, validate the existing buffer against it -
    ///    a mismatch or overflow resets the attempt, a confirmed prefix is
    ///    highlighted symbol by symbol;
    /// 3. append each input symbol and run the exact-match catalog lookup
    ///    on the entire buffer, dispatching on a hit;
    /// 4. re-validate so the new symbols are confirmed or rejected within
    ///    this same tick.
    ///
    /// A dispatch does not clear the buffer; only a mismatch, overflow,
    /// explicit clear, or queue advance does.
    pub fn tick(&mut self, inputs: &[Symbol]) {
        let requirement = self.resolver.resolve().cloned();
        let requirement = requirement.filter(|r| !r.is_empty());

        if let Some(req) = &requirement {
            self.run_prefix_pass(req);
        }

        for &symbol in inputs {
            self.buffer.push(symbol);
            self.history = self
                .history
                .record(RecognitionEvent::SymbolBuffered { symbol });
            self.check_for_valid_combo();
        }

        if !inputs.is_empty() {
            if let Some(req) = &requirement {
                self.run_prefix_pass(req);
            }
        }
    }

    /// Like [`tick`](Self::tick), but takes the raw set of symbols pressed
    /// this frame and arranges them into the fixed polling order first, so
    /// multi-key ties resolve deterministically.
    pub fn tick_pressed(&mut self, pressed: &[Symbol]) {
        let ordered = in_poll_order(pressed);
        self.tick(&ordered);
    }

    fn run_prefix_pass(&mut self, requirement: &Sequence) {
        match check_prefix(self.buffer.sequence(), requirement) {
            PrefixCheck::NothingTyped => {
                self.phase = MatchPhase::Empty;
            }
            check @ PrefixCheck::Advance { confirmed } => {
                for index in 0..confirmed {
                    self.highlighter.highlight(index);
                }
                let catalog_hit = self.catalog.lookup(self.buffer.sequence()).is_some();
                self.phase = check.phase(requirement.len(), catalog_hit);
            }
            PrefixCheck::Reject { at, kind } => {
                let event = match kind {
                    MismatchKind::WrongSymbol { expected, found } => {
                        tracing::debug!(
                            at,
                            expected = expected.name(),
                            found = found.name(),
                            "combo attempt mismatched"
                        );
                        RecognitionEvent::Mismatch {
                            at,
                            expected,
                            found,
                        }
                    }
                    MismatchKind::Overflow { length, limit } => {
                        tracing::debug!(length, limit, "combo attempt overflowed requirement");
                        RecognitionEvent::Overflow { length, limit }
                    }
                };
                self.reset_attempt();
                self.highlighter.reset_highlights(requirement.len());
                self.history = self.history.record(event);
                // Invalid is transient; observers only ever see Empty.
                self.phase = MatchPhase::Empty;
            }
        }
    }

    /// Look up the entire current buffer in the catalog; dispatch on a hit.
    fn check_for_valid_combo(&mut self) {
        let buffer = self.buffer.sequence().clone();

        let Some(trigger) = self.catalog.lookup(&buffer).cloned() else {
            tracing::debug!(buffer = %buffer, "invalid combo attempt");
            self.history = self
                .history
                .record(RecognitionEvent::UnknownSequence { buffer });
            return;
        };

        self.reset_all_triggers();
        self.dispatcher.activate(&trigger);
        tracing::debug!(combo = %buffer, trigger = %trigger, "combo dispatched");

        self.last_valid = Some(buffer.clone());
        self.active_trigger = Some(trigger.clone());
        self.history = self.history.record(RecognitionEvent::Dispatched {
            combo: buffer.clone(),
            trigger,
        });

        // Completing the override sequence releases the override; any other
        // dispatch leaves it pending.
        if self.resolver.override_requirement() == Some(&buffer) && self.resolver.clear_override()
        {
            self.history = self.history.record(RecognitionEvent::OverrideCleared);
        }
    }

    fn reset_all_triggers(&mut self) {
        let known: Vec<TriggerId> = self.catalog.trigger_ids().cloned().collect();
        for id in &known {
            self.dispatcher.reset_trigger(id);
        }
    }

    fn reset_attempt(&mut self) {
        self.buffer.clear();
        self.last_valid = None;
        self.active_trigger = None;
    }

    /// Append a requirement to the back of the queue.
    ///
    /// The key is not checked against the catalog: an unrecognized
    /// requirement can never complete and silently stalls its slot until
    /// [`advance_queue`](Self::advance_queue) pops it.
    pub fn enqueue_combo(&mut self, requirement: Sequence) {
        self.resolver.queue_mut().enqueue(requirement);
    }

    /// Pop the queue front and reset the current attempt.
    ///
    /// Used when a combo session is considered finished by an external
    /// decision; completion alone never advances the queue.
    pub fn advance_queue(&mut self) {
        let popped = self.resolver.queue_mut().pop_front();
        self.reset_attempt();
        self.history = self
            .history
            .record(RecognitionEvent::QueueAdvanced { popped });
    }

    /// Replace the active requirement immediately, independent of the
    /// queue. Fired by zone-entry collaborators.
    ///
    /// The override persists until [`clear_override`](Self::clear_override)
    /// or until the override sequence itself is successfully completed;
    /// it bypasses the queue without popping it.
    pub fn set_override_requirement(&mut self, requirement: Sequence) {
        self.resolver.set_override(requirement.clone());
        self.history = self
            .history
            .record(RecognitionEvent::OverrideSet { requirement });
    }

    /// Drop a pending override, letting the queue drive again.
    pub fn clear_override(&mut self) {
        if self.resolver.clear_override() {
            self.history = self.history.record(RecognitionEvent::OverrideCleared);
        }
    }

    /// Reset the input buffer, last valid combo, and active trigger marker.
    ///
    /// No collaborator is touched: trigger states persist until the next
    /// dispatch or terminal event.
    pub fn clear(&mut self) {
        self.reset_attempt();
        self.history = self.history.record(RecognitionEvent::Cleared);
    }

    /// Handle the terminal/death event as one synchronous fan-out.
    ///
    /// Clears recognition state, resets every known trigger, fires the
    /// configured terminal trigger, zeroes movement speed, and switches the
    /// camera to follow mode. Atomic from the caller's perspective.
    pub fn dispatch_terminal(&mut self) {
        let trigger = self.terminal_trigger.clone();
        tracing::debug!(trigger = %trigger, "terminal event dispatched");

        self.reset_attempt();
        self.reset_all_triggers();
        self.dispatcher.activate(&trigger);
        self.speed.set_speed(0.0);
        self.camera.set_following(true);

        self.history = self.history.record(RecognitionEvent::Terminal { trigger });
    }

    /// The most recent input sequence that fully matched a catalog entry.
    pub fn last_performed_combo(&self) -> Option<&Sequence> {
        self.last_valid.as_ref()
    }

    /// The trigger currently marked active, if any.
    pub fn active_trigger(&self) -> Option<&TriggerId> {
        self.active_trigger.as_ref()
    }

    /// Where the current attempt stands.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The requirement as of the last tick.
    pub fn active_requirement(&self) -> Option<&Sequence> {
        self.resolver.active()
    }

    /// The current input buffer contents.
    pub fn buffer(&self) -> &Sequence {
        self.buffer.sequence()
    }

    /// The queue of upcoming requirements.
    pub fn queue(&self) -> &ComboQueue {
        self.resolver.queue()
    }

    /// The injected catalog.
    pub fn catalog(&self) -> &ComboCatalog {
        &self.catalog
    }

    /// The structured diagnostic event history.
    pub fn history(&self) -> &RecognitionHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RecognizerBuilder;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        highlights: Vec<usize>,
        highlight_resets: Vec<usize>,
        activated: Vec<String>,
        trigger_resets: Vec<String>,
        speed: Option<f32>,
        following: Option<bool>,
    }

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Recorder>>);

    impl SymbolHighlighter for Shared {
        fn highlight(&mut self, index: usize) {
            self.0.borrow_mut().highlights.push(index);
        }

        fn reset_highlights(&mut self, count: usize) {
            self.0.borrow_mut().highlight_resets.push(count);
        }
    }

    impl ActionDispatcher for Shared {
        fn activate(&mut self, id: &TriggerId) {
            self.0.borrow_mut().activated.push(id.as_str().to_string());
        }

        fn reset_trigger(&mut self, id: &TriggerId) {
            self.0
                .borrow_mut()
                .trigger_resets
                .push(id.as_str().to_string());
        }
    }

    impl SpeedController for Shared {
        fn set_speed(&mut self, value: f32) {
            self.0.borrow_mut().speed = Some(value);
        }
    }

    impl CameraRig for Shared {
        fn set_following(&mut self, following: bool) {
            self.0.borrow_mut().following = Some(following);
        }
    }

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn recognizer(entries: &[(&str, &str)]) -> (ComboRecognizer, Shared) {
        let catalog =
            ComboCatalog::from_entries(entries.iter().map(|&(k, v)| (k, v))).unwrap();
        let shared = Shared::default();
        let recognizer = RecognizerBuilder::new()
            .catalog(catalog)
            .highlighter(shared.clone())
            .dispatcher(shared.clone())
            .speed_controller(shared.clone())
            .camera(shared.clone())
            .build()
            .unwrap();
        (recognizer, shared)
    }

    #[test]
    fn double_up_scenario_dispatches_on_second_symbol() {
        let (mut rec, shared) = recognizer(&[("WW", "DoubleUp")]);
        rec.enqueue_combo(seq("WW"));

        rec.tick(&[Symbol::Up]);
        assert_eq!(shared.0.borrow().highlights, vec![0]);
        assert!(shared.0.borrow().activated.is_empty());
        assert_eq!(rec.phase(), MatchPhase::Matching);

        rec.tick(&[Symbol::Up]);
        assert_eq!(shared.0.borrow().activated, vec!["DoubleUp"]);
        assert_eq!(rec.last_performed_combo(), Some(&seq("WW")));
        assert_eq!(rec.phase(), MatchPhase::Complete);
    }

    #[test]
    fn wrong_first_symbol_resets_same_tick() {
        let (mut rec, shared) = recognizer(&[("WS", "Duck")]);
        rec.enqueue_combo(seq("WS"));

        rec.tick(&[Symbol::Down]);

        assert!(rec.buffer().is_empty());
        assert!(shared.0.borrow().highlights.is_empty());
        assert!(shared.0.borrow().activated.is_empty());
        assert_eq!(shared.0.borrow().highlight_resets, vec![2]);
        assert_eq!(rec.phase(), MatchPhase::Empty);
    }

    #[test]
    fn overflow_after_complete_resets_buffer() {
        let (mut rec, shared) = recognizer(&[("SSS", "Crouch3")]);
        rec.enqueue_combo(seq("SSS"));

        for _ in 0..3 {
            rec.tick(&[Symbol::Down]);
        }
        assert_eq!(shared.0.borrow().activated, vec!["Crouch3"]);
        assert_eq!(rec.phase(), MatchPhase::Complete);

        // Fourth symbol overflows the unchanged requirement.
        rec.tick(&[Symbol::Down]);
        assert!(rec.buffer().is_empty());
        assert_eq!(rec.phase(), MatchPhase::Empty);
        assert_eq!(rec.history().reset_count(), 1);
    }

    #[test]
    fn override_bypasses_queue_without_popping() {
        let (mut rec, shared) = recognizer(&[("AA", "DoubleLeft"), ("DD", "DoubleRight")]);
        rec.enqueue_combo(seq("AA"));
        rec.set_override_requirement(seq("DD"));

        rec.tick(&[Symbol::Right]);
        rec.tick(&[Symbol::Right]);

        assert_eq!(shared.0.borrow().activated, vec!["DoubleRight"]);
        assert_eq!(rec.queue().front(), Some(&seq("AA")));
    }

    #[test]
    fn completing_the_override_releases_it() {
        let (mut rec, _shared) = recognizer(&[("AA", "DoubleLeft"), ("DD", "DoubleRight")]);
        rec.enqueue_combo(seq("AA"));
        rec.set_override_requirement(seq("DD"));

        rec.tick(&[Symbol::Right]);
        rec.tick(&[Symbol::Right]);

        // Next tick the queue front drives again.
        rec.tick(&[]);
        assert_eq!(rec.active_requirement(), Some(&seq("AA")));
    }

    #[test]
    fn dispatch_resets_all_known_triggers_first() {
        let (mut rec, shared) = recognizer(&[("W", "Step"), ("WW", "DoubleUp")]);
        rec.enqueue_combo(seq("WW"));

        rec.tick(&[Symbol::Up]);

        let recorder = shared.0.borrow();
        assert_eq!(recorder.activated, vec!["Step"]);
        let mut resets = recorder.trigger_resets.clone();
        resets.sort_unstable();
        assert_eq!(resets, vec!["DoubleUp", "Step"]);
    }

    #[test]
    fn unknown_sequence_keeps_buffering() {
        let (mut rec, _shared) = recognizer(&[("WW", "DoubleUp")]);
        rec.enqueue_combo(seq("WW"));

        rec.tick(&[Symbol::Up]);

        // "W" names no catalog entry, but the attempt is still alive.
        assert_eq!(rec.buffer(), &seq("W"));
        assert!(rec
            .history()
            .records()
            .iter()
            .any(|r| matches!(r.event, RecognitionEvent::UnknownSequence { .. })));
    }

    #[test]
    fn empty_requirement_disables_matching() {
        let (mut rec, shared) = recognizer(&[("WW", "DoubleUp")]);

        // Nothing queued, no override: buffer grows without validation.
        rec.tick(&[Symbol::Down]);
        rec.tick(&[Symbol::Down]);
        rec.tick(&[Symbol::Down]);

        assert_eq!(rec.buffer().len(), 3);
        assert!(shared.0.borrow().highlights.is_empty());
        assert!(shared.0.borrow().highlight_resets.is_empty());
    }

    #[test]
    fn queue_mutation_alone_cannot_complete() {
        let (mut rec, shared) = recognizer(&[("WW", "DoubleUp")]);

        rec.enqueue_combo(seq("WW"));
        rec.advance_queue();
        rec.tick(&[]);

        assert_ne!(rec.phase(), MatchPhase::Complete);
        assert!(shared.0.borrow().activated.is_empty());
        assert!(rec.last_performed_combo().is_none());
    }

    #[test]
    fn advance_queue_resets_attempt_state() {
        let (mut rec, _shared) = recognizer(&[("W", "Step"), ("WW", "DoubleUp")]);
        rec.enqueue_combo(seq("WW"));
        rec.tick(&[Symbol::Up]);

        assert_eq!(rec.last_performed_combo(), Some(&seq("W")));

        rec.advance_queue();
        assert!(rec.buffer().is_empty());
        assert!(rec.last_performed_combo().is_none());
        assert!(rec.active_trigger().is_none());
        assert!(rec.queue().is_empty());
    }

    #[test]
    fn advance_queue_on_empty_queue_still_clears() {
        let (mut rec, _shared) = recognizer(&[("W", "Step")]);
        rec.tick(&[Symbol::Up]);
        assert!(!rec.buffer().is_empty());

        rec.advance_queue();
        assert!(rec.buffer().is_empty());
    }

    #[test]
    fn clear_touches_no_collaborator() {
        let (mut rec, shared) = recognizer(&[("W", "Step")]);
        rec.enqueue_combo(seq("W"));
        rec.tick(&[Symbol::Up]);

        shared.0.borrow_mut().activated.clear();
        shared.0.borrow_mut().trigger_resets.clear();

        rec.clear();

        assert!(rec.buffer().is_empty());
        assert!(rec.last_performed_combo().is_none());
        assert!(shared.0.borrow().activated.is_empty());
        assert!(shared.0.borrow().trigger_resets.is_empty());
    }

    #[test]
    fn terminal_event_fans_out_atomically() {
        let (mut rec, shared) = recognizer(&[("W", "Step"), ("SS", "Slide")]);
        rec.enqueue_combo(seq("SS"));
        rec.tick(&[Symbol::Down]);

        rec.dispatch_terminal();

        let recorder = shared.0.borrow();
        assert_eq!(recorder.activated.last().map(String::as_str), Some("Die"));
        assert!(recorder.trigger_resets.contains(&"Step".to_string()));
        assert!(recorder.trigger_resets.contains(&"Slide".to_string()));
        assert_eq!(recorder.speed, Some(0.0));
        assert_eq!(recorder.following, Some(true));
        drop(recorder);

        assert!(rec.buffer().is_empty());
        assert!(rec.last_performed_combo().is_none());
    }

    #[test]
    fn dispatch_does_not_clear_the_buffer() {
        let (mut rec, _shared) = recognizer(&[("SS", "Slide"), ("SSS", "Crouch3")]);
        rec.enqueue_combo(seq("SSS"));

        rec.tick(&[Symbol::Down]);
        rec.tick(&[Symbol::Down]);
        assert_eq!(rec.last_performed_combo(), Some(&seq("SS")));
        assert_eq!(rec.buffer(), &seq("SS"));

        // The longer sequence extending the match still completes.
        rec.tick(&[Symbol::Down]);
        assert_eq!(rec.last_performed_combo(), Some(&seq("SSS")));
    }

    #[test]
    fn stalled_unknown_requirement_never_completes() {
        let (mut rec, shared) = recognizer(&[("WW", "DoubleUp")]);
        rec.enqueue_combo(seq("AD"));

        rec.tick(&[Symbol::Left]);
        rec.tick(&[Symbol::Right]);

        // The requirement "AD" names no catalog entry: the prefix matches
        // fully but the phase never reaches Complete.
        assert_eq!(rec.phase(), MatchPhase::Matching);
        assert!(shared.0.borrow().activated.is_empty());
    }

    #[test]
    fn multi_key_tick_appends_in_poll_order() {
        let (mut rec, _shared) = recognizer(&[("WA", "UpLeft")]);
        rec.enqueue_combo(seq("WA"));

        // Delivered out of order by the host; tick_pressed fixes it.
        rec.tick_pressed(&[Symbol::Left, Symbol::Up]);

        assert_eq!(rec.last_performed_combo(), Some(&seq("WA")));
    }

    #[test]
    fn requirement_change_revalidates_existing_buffer() {
        let (mut rec, shared) = recognizer(&[("WW", "DoubleUp"), ("SS", "Slide")]);
        rec.enqueue_combo(seq("WW"));
        rec.tick(&[Symbol::Up]);
        assert_eq!(rec.buffer(), &seq("W"));

        // Zone entry swaps the requirement; the buffered W no longer fits.
        rec.set_override_requirement(seq("SS"));
        rec.tick(&[]);

        assert!(rec.buffer().is_empty());
        assert_eq!(shared.0.borrow().highlight_resets, vec![2]);
    }
}
