//=========================================================================
// Logical Layer
//=========================================================================
//
// Evaluates input triggers once per tick against the previous and current
// input snapshots.
//
// Tick pipeline (check_triggers):
// ```text
//   1. ThreadGuard        → only the logic thread may evaluate
//   2. FocusSignalSource  → focus lost? release every held input
//   3. StateTracker       → digest this tick's event batches, in order
//                           (an in-stream `FocusLost` releases again)
//   4. snapshot()         → current (same Arc when nothing changed)
//   5. InputStatePair     → (previous, current)
//   6. triggers           → active context, registration order → actions
// ```
//
// Only the pair of the last tick is retained; older snapshots are dropped
// as soon as they slide out of `previous`.
//
// The latch only says that focus was lost, not where in the event stream.
// Input buffered before the loss can arrive a tick later, so the platform
// also queues `InputEvent::FocusLost` behind it and the release is applied
// again once that input has been digested.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Crates =====================================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::action::{Action, InputContext};
use super::event::InputEvent;
use super::focus::FocusSignalSource;
use super::input_state::InputState;
use super::state_pair::InputStatePair;
use super::state_tracker::StateTracker;
use super::trigger::InputTrigger;
use crate::core::thread_guard::{ThreadError, ThreadGuard};

//=== LogicalLayer ========================================================

/// Owns the trigger list and the last two input snapshots.
pub struct LogicalLayer<A: Action> {
    triggers: Vec<InputTrigger<A>>,
    current_context: InputContext,

    tracker: StateTracker,
    previous: Option<Arc<InputState>>,
    current: Option<Arc<InputState>>,

    focus: Option<Box<dyn FocusSignalSource>>,
    guard: ThreadGuard,

    fired: Vec<A>,
}

impl<A: Action> LogicalLayer<A> {
    /// Creates an empty layer designated to the calling thread.
    pub fn new() -> Self {
        Self {
            triggers: Vec::new(),
            current_context: InputContext::Primary,
            tracker: StateTracker::new(),
            previous: None,
            current: None,
            focus: None,
            guard: ThreadGuard::current("LogicalLayer::check_triggers"),
            fired: Vec::with_capacity(8),
        }
    }

    //--- Trigger Registration ---------------------------------------------

    /// Appends a trigger. Triggers are evaluated in registration order.
    pub fn register_trigger(&mut self, trigger: InputTrigger<A>) {
        debug!(target: "input", "Registered trigger {:?}", trigger);
        self.triggers.push(trigger);
    }

    /// Removes every trigger registered under `name`. Returns how many were
    /// removed.
    pub fn deregister_trigger(&mut self, name: &str) -> usize {
        let before = self.triggers.len();
        self.triggers.retain(|t| t.name() != Some(name));
        before - self.triggers.len()
    }

    /// Removes every trigger of a context.
    pub fn clear_context(&mut self, context: InputContext) {
        self.triggers.retain(|t| t.context() != context);
    }

    pub fn triggers(&self) -> &[InputTrigger<A>] {
        &self.triggers
    }

    //--- Context ----------------------------------------------------------

    pub fn set_context(&mut self, context: InputContext) {
        if self.current_context != context {
            debug!(target: "input", "Input context {:?} → {:?}", self.current_context, context);
            self.current_context = context;
        }
    }

    pub fn current_context(&self) -> InputContext {
        self.current_context
    }

    //--- Collaborators ----------------------------------------------------

    /// Installs the focus source polled at the start of every tick.
    pub fn set_focus_source(&mut self, source: Box<dyn FocusSignalSource>) {
        self.focus = Some(source);
    }

    /// Re-designates the calling thread as the only one allowed to call
    /// `check_triggers`.
    pub fn bind_to_current_thread(&mut self) {
        self.guard.rebind_to_current();
    }

    //--- Tick -------------------------------------------------------------

    /// Runs one tick and returns the actions fired, in trigger order.
    ///
    /// # Errors
    ///
    /// [`ThreadError::WrongThread`] when called off the designated thread;
    /// no state is touched in that case.
    pub fn check_triggers(&mut self, batches: &[Vec<InputEvent>]) -> Result<&[A], ThreadError> {
        self.guard.ensure_current()?;

        if self.focus.as_ref().map_or(false, |f| f.get_and_clear_focus_lost()) {
            info!(target: "input::focus", "Focus lost, releasing held inputs");
            self.tracker.release_all();
        }

        for batch in batches {
            self.tracker.process_events(batch);
        }

        let snapshot = self.tracker.snapshot();
        self.previous = self.current.take();
        self.current = Some(snapshot);

        let states = InputStatePair::new(self.previous.as_deref(), self.current.as_deref());
        if !states.is_aliased() {
            trace!(target: "input", "Input changed: {:?}", states.current());
        }

        self.fired.clear();
        for trigger in &self.triggers {
            if trigger.context() != self.current_context {
                continue;
            }
            if let Some(action) = trigger.check(&states) {
                self.fired.push(action);
            }
        }

        if !self.fired.is_empty() {
            debug!(target: "input", "Fired actions: {:?}", self.fired);
        }

        Ok(&self.fired)
    }

    //--- Queries ----------------------------------------------------------

    /// Pair evaluated by the last tick.
    pub fn states(&self) -> InputStatePair<'_> {
        InputStatePair::new(self.previous.as_deref(), self.current.as_deref())
    }

    /// Actions fired by the last tick.
    pub fn fired(&self) -> &[A] {
        &self.fired
    }
}

impl<A: Action> Default for LogicalLayer<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
