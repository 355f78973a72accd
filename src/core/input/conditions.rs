//=========================================================================
// Trigger Conditions
//=========================================================================
//
// Ready-made conditions over an `InputStatePair`.
//
// Transition conditions (pressed, released, moved) need both states; with
// either side absent they never hold. Held conditions look only at the
// current state. An aliased pair (no change since last tick) never shows a
// transition, but still reports what is held.
//
// Key and button transitions hold when the held sets differ between the
// two states or when the current state recorded the transition itself,
// which covers a tap that went down and up within one tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, MouseButton};
use super::input_state::InputState;
use super::state_pair::InputStatePair;
use super::trigger::TriggerCondition;

//--- distinct_pair() -----------------------------------------------------
//
// Distinct (previous, current) pair, or `None` when a transition cannot be
// observed.
//
fn distinct_pair<'a>(states: &InputStatePair<'a>) -> Option<(&'a InputState, &'a InputState)> {
    if states.is_aliased() {
        return None;
    }
    states.both()
}

//=== Closure Helper ======================================================

/// Pins a closure to the condition signature.
///
/// Closure parameter lifetimes are inferred from the expected type; going
/// through this function makes them generic over the pair's lifetime.
pub fn condition<F>(f: F) -> F
where
    F: Fn(&InputStatePair<'_>) -> bool + Send,
{
    f
}

//=== Keyboard ============================================================

/// Key went from up to down since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressed(pub KeyCode);

/// Key went from down to up since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReleased(pub KeyCode);

/// Key is down in the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHeld(pub KeyCode);

/// Any key went from up to down since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnyKeyPressed;

impl TriggerCondition for KeyPressed {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        distinct_pair(states).map_or(false, |(previous, current)| {
            current.was_key_pressed(self.0)
                || (current.is_key_down(self.0) && !previous.is_key_down(self.0))
        })
    }
}

impl TriggerCondition for KeyReleased {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        distinct_pair(states).map_or(false, |(previous, current)| {
            current.was_key_released(self.0)
                || (previous.is_key_down(self.0) && !current.is_key_down(self.0))
        })
    }
}

impl TriggerCondition for KeyHeld {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        states.current().map_or(false, |current| current.is_key_down(self.0))
    }
}

impl TriggerCondition for AnyKeyPressed {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        distinct_pair(states).map_or(false, |(previous, current)| {
            current.any_key_pressed() || current.keys_pressed_since(previous).next().is_some()
        })
    }
}

//=== Mouse Buttons =======================================================

/// Button went from up to down since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPressed(pub MouseButton);

/// Button went from down to up since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonReleased(pub MouseButton);

/// Button is down in the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonHeld(pub MouseButton);

impl TriggerCondition for ButtonPressed {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        distinct_pair(states).map_or(false, |(previous, current)| {
            current.was_button_pressed(self.0)
                || (current.is_button_down(self.0) && !previous.is_button_down(self.0))
        })
    }
}

impl TriggerCondition for ButtonReleased {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        distinct_pair(states).map_or(false, |(previous, current)| {
            current.was_button_released(self.0)
                || (previous.is_button_down(self.0) && !current.is_button_down(self.0))
        })
    }
}

impl TriggerCondition for ButtonHeld {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        states.current().map_or(false, |current| current.is_button_down(self.0))
    }
}

//=== Pointer Motion ======================================================

/// Cursor position differs between the two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseMoved;

/// Scroll happened during the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelMoved;

impl TriggerCondition for MouseMoved {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        states
            .both()
            .map_or(false, |(previous, current)| {
                previous.mouse_position() != current.mouse_position()
            })
    }
}

impl TriggerCondition for WheelMoved {
    fn evaluate(&self, states: &InputStatePair<'_>) -> bool {
        if states.is_aliased() {
            return false;
        }
        states
            .current()
            .map_or(false, |current| current.wheel_delta() != (0.0, 0.0))
    }
}

//=== Constant ============================================================

/// Holds every tick, whatever the states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Always;

impl TriggerCondition for Always {
    fn evaluate(&self, _states: &InputStatePair<'_>) -> bool {
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{InputEvent, Modifiers};
    use crate::core::input::input_state::InputState;
    use crate::core::input::state_tracker::StateTracker;
    use crate::core::input::trigger::ConditionExt;
    use std::sync::Arc;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    fn button_down(button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonDown { button, modifiers: Modifiers::NONE }
    }

    fn button_up(button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonUp { button, modifiers: Modifiers::NONE }
    }

    /// Two successive snapshots: `first` then `second` applied on top.
    fn transition(first: &[InputEvent], second: &[InputEvent]) -> (Arc<InputState>, Arc<InputState>) {
        let mut tracker = StateTracker::new();
        tracker.process_events(first);
        let previous = tracker.snapshot();
        tracker.process_events(second);
        let current = tracker.snapshot();
        (previous, current)
    }

    fn holds<C: TriggerCondition>(condition: C, previous: &InputState, current: &InputState) -> bool {
        condition.evaluate(&InputStatePair::new(Some(previous), Some(current)))
    }

    //=====================================================================
    // Keyboard
    //=====================================================================

    #[test]
    fn key_pressed_fires_on_transition_only() {
        let (previous, current) = transition(&[], &[key_down(KeyCode::Space)]);
        assert!(holds(KeyPressed(KeyCode::Space), &previous, &current));

        // Still held next tick: same snapshot on both sides.
        assert!(!holds(KeyPressed(KeyCode::Space), &current, &current));
    }

    #[test]
    fn key_released_fires_on_transition_only() {
        let (previous, current) = transition(&[key_down(KeyCode::KeyE)], &[key_up(KeyCode::KeyE)]);
        assert!(holds(KeyReleased(KeyCode::KeyE), &previous, &current));
        assert!(!holds(KeyPressed(KeyCode::KeyE), &previous, &current));
        assert!(!holds(KeyReleased(KeyCode::KeyE), &current, &current));
    }

    #[test]
    fn tap_inside_one_tick_is_a_press_and_a_release() {
        let (previous, current) = transition(&[], &[key_down(KeyCode::Space), key_up(KeyCode::Space)]);

        assert!(holds(KeyPressed(KeyCode::Space), &previous, &current));
        assert!(holds(KeyReleased(KeyCode::Space), &previous, &current));
        assert!(holds(AnyKeyPressed, &previous, &current));
        assert!(!holds(KeyHeld(KeyCode::Space), &previous, &current));
    }

    #[test]
    fn click_inside_one_tick_is_a_press_and_a_release() {
        let (previous, current) =
            transition(&[], &[button_down(MouseButton::Right), button_up(MouseButton::Right)]);

        assert!(holds(ButtonPressed(MouseButton::Right), &previous, &current));
        assert!(holds(ButtonReleased(MouseButton::Right), &previous, &current));
        assert!(!holds(ButtonPressed(MouseButton::Right), &current, &current));
    }

    #[test]
    fn key_held_needs_only_current() {
        let (_, current) = transition(&[], &[key_down(KeyCode::KeyW)]);
        let startup = InputStatePair::new(None, Some(&*current));

        assert!(KeyHeld(KeyCode::KeyW).evaluate(&startup));
        assert!(!KeyPressed(KeyCode::KeyW).evaluate(&startup), "No previous, no transition");
    }

    #[test]
    fn key_held_holds_on_aliased_pair() {
        let (_, current) = transition(&[], &[key_down(KeyCode::KeyW)]);
        assert!(holds(KeyHeld(KeyCode::KeyW), &current, &current));
    }

    #[test]
    fn any_key_pressed() {
        let (previous, current) = transition(&[key_down(KeyCode::KeyA)], &[key_down(KeyCode::KeyB)]);
        assert!(holds(AnyKeyPressed, &previous, &current));
        assert!(!holds(AnyKeyPressed, &current, &current));
    }

    //=====================================================================
    // Mouse Buttons
    //=====================================================================

    #[test]
    fn button_conditions() {
        let (previous, current) = transition(&[], &[button_down(MouseButton::Left)]);
        assert!(holds(ButtonPressed(MouseButton::Left), &previous, &current));
        assert!(holds(ButtonHeld(MouseButton::Left), &previous, &current));
        assert!(!holds(ButtonPressed(MouseButton::Right), &previous, &current));

        let (held, released) = transition(&[button_down(MouseButton::Left)], &[button_up(MouseButton::Left)]);
        assert!(holds(ButtonReleased(MouseButton::Left), &held, &released));
        assert!(!holds(ButtonHeld(MouseButton::Left), &held, &released));
    }

    //=====================================================================
    // Pointer Motion
    //=====================================================================

    #[test]
    fn mouse_moved_compares_positions() {
        let (previous, current) = transition(&[], &[InputEvent::MouseMoved { x: 4.0, y: 2.0 }]);
        assert!(holds(MouseMoved, &previous, &current));
        assert!(!holds(MouseMoved, &current, &current));
    }

    #[test]
    fn wheel_moved_ignores_aliased_pair() {
        let (previous, current) = transition(&[], &[InputEvent::MouseWheel { dx: 0.0, dy: -1.0 }]);
        assert!(holds(WheelMoved, &previous, &current));
        assert!(!holds(WheelMoved, &current, &current));
    }

    //=====================================================================
    // Absent States
    //=====================================================================

    #[test]
    fn absent_states_never_panic() {
        let none = InputStatePair::new(None, None);

        assert!(!KeyPressed(KeyCode::KeyA).evaluate(&none));
        assert!(!KeyReleased(KeyCode::KeyA).evaluate(&none));
        assert!(!KeyHeld(KeyCode::KeyA).evaluate(&none));
        assert!(!ButtonPressed(MouseButton::Left).evaluate(&none));
        assert!(!ButtonHeld(MouseButton::Left).evaluate(&none));
        assert!(!MouseMoved.evaluate(&none));
        assert!(!WheelMoved.evaluate(&none));
        assert!(!AnyKeyPressed.evaluate(&none));
        assert!(Always.evaluate(&none));
    }

    //=====================================================================
    // Composition
    //=====================================================================

    #[test]
    fn shift_click_composition() {
        let shift_click = ButtonPressed(MouseButton::Left).and(condition(|states| {
            states.current().map_or(false, |s| s.modifiers().shift)
        }));

        let (previous, current) = transition(
            &[],
            &[InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::SHIFT }],
        );
        assert!(holds(shift_click, &previous, &current));
    }

    #[test]
    fn held_but_not_newly_pressed() {
        let repeat_only = KeyHeld(KeyCode::KeyD).and(KeyPressed(KeyCode::KeyD).not());

        let (previous, current) = transition(&[], &[key_down(KeyCode::KeyD)]);
        let first_tick = InputStatePair::new(Some(&*previous), Some(&*current));
        let next_tick = InputStatePair::new(Some(&*current), Some(&*current));

        assert!(!repeat_only.evaluate(&first_tick));
        assert!(repeat_only.evaluate(&next_tick));
    }
}
