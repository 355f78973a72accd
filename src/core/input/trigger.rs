//=========================================================================
// Input Triggers
//=========================================================================
//
// Predicate-based triggers over an `InputStatePair`.
//
// Architecture:
//   InputStatePair → TriggerCondition::evaluate() → bool → Action fired
//
// A condition is any `Fn(&InputStatePair) -> bool`, or one of the
// ready-made conditions in `conditions`. Conditions compose with
// `and` / `or` / `not` from `ConditionExt`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::action::{Action, InputContext};
use super::state_pair::InputStatePair;

//=== TriggerCondition ====================================================

/// Predicate deciding whether a trigger fires for a tick.
///
/// Conditions must tolerate absent states and aliased pairs.
pub trait TriggerCondition: Send {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool;
}

impl<F> TriggerCondition for F
where
    F: Fn(&InputStatePair<'_>) -> bool + Send,
{
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        self(states)
    }
}

//=== Combinators =========================================================

/// Both conditions hold.
pub struct And<L, R>(L, R);

/// Either condition holds.
pub struct Or<L, R>(L, R);

/// The condition does not hold.
pub struct Not<C>(C);

impl<L: TriggerCondition, R: TriggerCondition> TriggerCondition for And<L, R> {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        self.0.evaluate(states) && self.1.evaluate(states)
    }
}

impl<L: TriggerCondition, R: TriggerCondition> TriggerCondition for Or<L, R> {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        self.0.evaluate(states) || self.1.evaluate(states)
    }
}

impl<C: TriggerCondition> TriggerCondition for Not<C> {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        !self.0.evaluate(states)
    }
}

/// Combinator methods available on every condition.
pub trait ConditionExt: TriggerCondition + Sized {
    fn and<R: TriggerCondition>(self, other: R) -> And<Self, R> {
        And(self, other)
    }

    fn or<R: TriggerCondition>(self, other: R) -> Or<Self, R> {
        Or(self, other)
    }

    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<C: TriggerCondition> ConditionExt for C {}

//=== InputTrigger ========================================================

/// A condition bound to the action it fires, within one context.
pub struct InputTrigger<A: Action> {
    name: Option<String>,
    condition: Box<dyn TriggerCondition>,
    action: A,
    context: InputContext,
}

impl<A: Action> InputTrigger<A> {
    /// Creates a trigger in the `Primary` context.
    pub fn new<C>(condition: C, action: A) -> Self
    where
        C: TriggerCondition + 'static,
    {
        Self {
            name: None,
            condition: Box::new(condition),
            action,
            context: InputContext::Primary,
        }
    }

    /// Names the trigger so it can be deregistered later.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn in_context(mut self, context: InputContext) -> Self {
        self.context = context;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn action(&self) -> A {
        self.action
    }

    pub fn context(&self) -> InputContext {
        self.context
    }

    /// Evaluates the condition; `Some(action)` if it holds.
    pub fn check(&self, states: &InputStatePair<'_>) -> Option<A> {
        self.condition.evaluate(states).then_some(self.action)
    }
}

impl<A: Action> fmt::Debug for InputTrigger<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputTrigger")
            .field("name", &self.name)
            .field("action", &self.action)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::conditions::condition;
    use crate::core::input::input_state::InputState;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    fn always(_: &InputStatePair<'_>) -> bool {
        true
    }

    fn never(_: &InputStatePair<'_>) -> bool {
        false
    }

    fn has_current(states: &InputStatePair<'_>) -> bool {
        states.current().is_some()
    }

    #[test]
    fn closures_are_conditions() {
        let threshold = 0.5_f32;
        let scrolled = condition(move |states| {
            states.current().map_or(false, |s| s.wheel_delta().1 > threshold)
        });
        let state = InputState::empty();
        assert!(!scrolled.evaluate(&InputStatePair::new(None, Some(&state))));
    }

    #[test]
    fn combinators_follow_boolean_logic() {
        let pair = InputStatePair::new(None, None);

        assert!(always.and(always).evaluate(&pair));
        assert!(!always.and(never).evaluate(&pair));
        assert!(never.or(always).evaluate(&pair));
        assert!(!never.or(never).evaluate(&pair));
        assert!(never.not().evaluate(&pair));
        assert!(!has_current.evaluate(&pair));
        assert!(has_current.not().evaluate(&pair));
    }

    #[test]
    fn nested_combinators() {
        let nested = always.and(never.not()).or(never);
        assert!(nested.evaluate(&InputStatePair::new(None, None)));
    }

    #[test]
    fn trigger_check_returns_action_when_condition_holds() {
        let pair = InputStatePair::new(None, None);

        let firing = InputTrigger::new(always, TestAction::Jump);
        assert_eq!(firing.check(&pair), Some(TestAction::Jump));

        let silent = InputTrigger::new(never, TestAction::Jump);
        assert_eq!(silent.check(&pair), None);
    }

    #[test]
    fn trigger_builder_sets_name_and_context() {
        let menu = InputContext::custom(1);
        let trigger = InputTrigger::new(always, TestAction::Jump)
            .named("jump")
            .in_context(menu);

        assert_eq!(trigger.name(), Some("jump"));
        assert_eq!(trigger.context(), menu);
        assert_eq!(trigger.action(), TestAction::Jump);
        assert!(format!("{:?}", trigger).contains("jump"));
    }
}
