//=========================================================================
// Input State
//=========================================================================
//
// Immutable snapshot of all device state at one tick.
//
// Produced by the `StateTracker` once per tick and shared behind an
// `Arc`. Nothing mutates a snapshot after it is built; a new tick either
// produces a new snapshot or hands out the same `Arc` again when nothing
// changed.
//
// Transition queries come in two flavours: `*_pressed_since` compare two
// snapshots, `was_*_pressed` report what happened during the tick that
// produced this snapshot. The latter keep a tap that started and ended
// inside one tick.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, Modifiers, MouseButton};

//=== InputState ==========================================================

/// Point-in-time snapshot of keyboard and mouse state.
#[derive(Clone, PartialEq, Default)]
pub struct InputState {
    pub(super) keys_down: HashSet<KeyCode>,
    pub(super) buttons_down: HashSet<MouseButton>,
    pub(super) mouse_position: (f32, f32),
    pub(super) mouse_delta: (f32, f32),
    pub(super) wheel_delta: (f32, f32),
    pub(super) modifiers: Modifiers,

    //--- Tick Transitions ----------------------------------------------
    pub(super) keys_pressed: HashSet<KeyCode>,
    pub(super) keys_released: HashSet<KeyCode>,
    pub(super) buttons_pressed: HashSet<MouseButton>,
    pub(super) buttons_released: HashSet<MouseButton>,
}

impl InputState {
    /// State with nothing held, cursor at the origin and no motion.
    pub fn empty() -> Self {
        Self::default()
    }

    //=====================================================================
    // Query API - Held State
    //=====================================================================

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    pub fn buttons_down(&self) -> impl Iterator<Item = &MouseButton> {
        self.buttons_down.iter()
    }

    /// Returns `true` if no key and no mouse button is held.
    pub fn is_idle(&self) -> bool {
        self.keys_down.is_empty() && self.buttons_down.is_empty()
    }

    //=====================================================================
    // Query API - Pointer
    //=====================================================================

    /// Cursor position in window pixels (top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Cursor movement since the previous snapshot.
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Scroll accumulated since the previous snapshot.
    pub fn wheel_delta(&self) -> (f32, f32) {
        self.wheel_delta
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    //=====================================================================
    // Query API - Transitions
    //=====================================================================

    /// Keys held now that were not held in `previous`.
    pub fn keys_pressed_since<'a>(
        &'a self,
        previous: &'a InputState,
    ) -> impl Iterator<Item = &'a KeyCode> {
        self.keys_down.difference(&previous.keys_down)
    }

    /// Keys held in `previous` that are no longer held.
    pub fn keys_released_since<'a>(
        &'a self,
        previous: &'a InputState,
    ) -> impl Iterator<Item = &'a KeyCode> {
        previous.keys_down.difference(&self.keys_down)
    }

    /// Buttons held now that were not held in `previous`.
    pub fn buttons_pressed_since<'a>(
        &'a self,
        previous: &'a InputState,
    ) -> impl Iterator<Item = &'a MouseButton> {
        self.buttons_down.difference(&previous.buttons_down)
    }

    /// Buttons held in `previous` that are no longer held.
    pub fn buttons_released_since<'a>(
        &'a self,
        previous: &'a InputState,
    ) -> impl Iterator<Item = &'a MouseButton> {
        previous.buttons_down.difference(&self.buttons_down)
    }

    /// Key went down during the tick that produced this snapshot, even if
    /// it is already up again.
    pub fn was_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn was_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn was_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn was_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Returns `true` if any key or button changed during this tick.
    pub fn has_transitions(&self) -> bool {
        !self.keys_pressed.is_empty()
            || !self.keys_released.is_empty()
            || !self.buttons_pressed.is_empty()
            || !self.buttons_released.is_empty()
    }

    pub fn any_key_pressed(&self) -> bool {
        !self.keys_pressed.is_empty()
    }
}

//=== Debug Trait =========================================================
//
// Sorted, compact output so log lines are stable between runs:
//
// ```text
// InputState { mouse: (420.0, 255.0), wheel: (0.0, 0.0), keys: [KeyW], buttons: [Left] }
// ```
//
impl fmt::Debug for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.keys_down.iter().map(|k| format!("{:?}", k)).collect();
        keys.sort();
        let mut buttons: Vec<_> = self.buttons_down.iter().map(|b| format!("{:?}", b)).collect();
        buttons.sort();

        f.debug_struct("InputState")
            .field("mouse", &self.mouse_position)
            .field("wheel", &self.wheel_delta)
            .field("keys", &keys)
            .field("buttons", &buttons)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn with_keys(keys: &[KeyCode]) -> InputState {
        InputState {
            keys_down: keys.iter().copied().collect(),
            ..InputState::empty()
        }
    }

    #[test]
    fn empty_state_is_idle() {
        let state = InputState::empty();
        assert!(state.is_idle());
        assert_eq!(state.mouse_position(), (0.0, 0.0));
        assert_eq!(state.modifiers(), Modifiers::NONE);
    }

    #[test]
    fn pressed_since_is_set_difference() {
        let previous = with_keys(&[KeyCode::KeyW]);
        let current = with_keys(&[KeyCode::KeyW, KeyCode::Space]);

        let pressed: Vec<_> = current.keys_pressed_since(&previous).copied().collect();
        assert_eq!(pressed, vec![KeyCode::Space]);
        assert_eq!(current.keys_released_since(&previous).count(), 0);
    }

    #[test]
    fn released_since_is_reverse_difference() {
        let previous = with_keys(&[KeyCode::KeyA, KeyCode::KeyD]);
        let current = with_keys(&[KeyCode::KeyD]);

        let released: Vec<_> = current.keys_released_since(&previous).copied().collect();
        assert_eq!(released, vec![KeyCode::KeyA]);
    }

    #[test]
    fn button_transitions() {
        let previous = InputState::empty();
        let current = InputState {
            buttons_down: [MouseButton::Right].into_iter().collect(),
            ..InputState::empty()
        };

        assert_eq!(
            current.buttons_pressed_since(&previous).copied().collect::<Vec<_>>(),
            vec![MouseButton::Right]
        );
        assert_eq!(
            previous.buttons_released_since(&current).copied().collect::<Vec<_>>(),
            vec![MouseButton::Right]
        );
    }

    #[test]
    fn tick_transitions_are_independent_of_held_state() {
        let tapped = InputState {
            keys_pressed: [KeyCode::Space].into_iter().collect(),
            keys_released: [KeyCode::Space].into_iter().collect(),
            ..InputState::empty()
        };

        assert!(!tapped.is_key_down(KeyCode::Space));
        assert!(tapped.was_key_pressed(KeyCode::Space));
        assert!(tapped.was_key_released(KeyCode::Space));
        assert!(tapped.has_transitions());
        assert!(!InputState::empty().has_transitions());
    }

    #[test]
    fn debug_output_is_sorted() {
        let state = with_keys(&[KeyCode::KeyW, KeyCode::KeyA]);
        let text = format!("{:?}", state);
        assert!(text.contains(r#"keys: ["KeyA", "KeyW"]"#), "got {}", text);
    }
}
