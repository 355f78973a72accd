//=========================================================================
// State Tracker
//=========================================================================
//
// Folds raw input events into immutable per-tick snapshots.
//
// Architecture:
//   InputEvent → process_events() → working state → snapshot() → Arc<InputState>
//
// Tick lifecycle: process_events() (0..n) → snapshot() → evaluate
//
// When nothing changed since the last snapshot, `snapshot()` hands out the
// very same `Arc` again. Consumers can therefore see "no change" as the
// previous and current states being the identical instance.
//
// Every transition of a tick is also recorded in its own set, so a key
// pressed and released between two snapshots still shows up as pressed.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;
use std::sync::Arc;

//=== External Crates =====================================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};
use super::input_state::InputState;

//=== StateTracker ========================================================

/// Accumulates input events and publishes immutable snapshots.
pub struct StateTracker {
    //--- Persistent State (survives tick boundary) -----------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,

    //--- Tick Accumulators (reset by snapshot()) -------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    wheel_delta: (f32, f32),
    dirty: bool,

    //--- Last Published Snapshot ------------------------------------------
    last: Arc<InputState>,
}

impl StateTracker {
    /// Creates a tracker whose last snapshot is `InputState::empty()`.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            modifiers: Modifiers::NONE,
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            buttons_pressed: HashSet::new(),
            buttons_released: HashSet::new(),
            wheel_delta: (0.0, 0.0),
            dirty: false,
            last: Arc::new(InputState::empty()),
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Applies a batch of events to the working state.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, modifiers } => {
                self.set_modifiers(modifiers);
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                    self.dirty = true;
                }
            }

            InputEvent::KeyUp { key, modifiers } => {
                self.set_modifiers(modifiers);
                if self.keys_down.remove(&key) {
                    self.keys_released.insert(key);
                    self.dirty = true;
                }
            }

            InputEvent::MouseButtonDown { button, modifiers } => {
                self.set_modifiers(modifiers);
                if self.buttons_down.insert(button) {
                    self.buttons_pressed.insert(button);
                    self.dirty = true;
                }
            }

            InputEvent::MouseButtonUp { button, modifiers } => {
                self.set_modifiers(modifiers);
                if self.buttons_down.remove(&button) {
                    self.buttons_released.insert(button);
                    self.dirty = true;
                }
            }

            InputEvent::MouseMoved { x, y } => {
                if self.mouse_position != (x, y) {
                    self.mouse_position = (x, y);
                    self.dirty = true;
                }
            }

            InputEvent::MouseWheel { dx, dy } => {
                if dx != 0.0 || dy != 0.0 {
                    self.wheel_delta.0 += dx;
                    self.wheel_delta.1 += dy;
                    self.dirty = true;
                }
            }

            InputEvent::FocusLost => self.release_all(),

            InputEvent::Unidentified => {
                trace!(target: "input", "Ignoring unidentified input event");
            }
        }
    }

    fn set_modifiers(&mut self, modifiers: Modifiers) {
        if self.modifiers != modifiers {
            self.modifiers = modifiers;
            self.dirty = true;
        }
    }

    //--- Snapshotting -----------------------------------------------------

    /// Publishes the state of this tick.
    ///
    /// Returns the previous `Arc` unchanged when no event altered the state
    /// and the last snapshot carried no motion and no transitions. Both are
    /// relative to the last published snapshot, so a quiet tick after a busy
    /// one still yields a new snapshot (deltas and transitions cleared).
    pub fn snapshot(&mut self) -> Arc<InputState> {
        let had_motion = self.last.mouse_delta != (0.0, 0.0) || self.last.wheel_delta != (0.0, 0.0);

        if !self.dirty && !had_motion && !self.last.has_transitions() {
            return Arc::clone(&self.last);
        }

        let previous_position = self.last.mouse_position;
        let state = InputState {
            keys_down: self.keys_down.clone(),
            buttons_down: self.buttons_down.clone(),
            mouse_position: self.mouse_position,
            mouse_delta: (
                self.mouse_position.0 - previous_position.0,
                self.mouse_position.1 - previous_position.1,
            ),
            wheel_delta: self.wheel_delta,
            modifiers: self.modifiers,
            keys_pressed: std::mem::take(&mut self.keys_pressed),
            keys_released: std::mem::take(&mut self.keys_released),
            buttons_pressed: std::mem::take(&mut self.buttons_pressed),
            buttons_released: std::mem::take(&mut self.buttons_released),
        };

        self.wheel_delta = (0.0, 0.0);
        self.dirty = false;
        self.last = Arc::new(state);
        Arc::clone(&self.last)
    }

    /// Releases every key and button (cursor position is kept). Each one
    /// counts as released during the current tick.
    ///
    /// Used when the window loses focus: key-up events for keys released
    /// while unfocused never arrive.
    pub fn release_all(&mut self) {
        if !self.keys_down.is_empty() || !self.buttons_down.is_empty() || !self.modifiers.is_empty() {
            self.keys_released.extend(self.keys_down.drain());
            self.buttons_released.extend(self.buttons_down.drain());
            self.modifiers = Modifiers::NONE;
            self.dirty = true;
        }
    }

    /// Last published snapshot.
    pub fn last_snapshot(&self) -> &Arc<InputState> {
        &self.last
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    fn mouse_down(button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonDown { button, modifiers: Modifiers::NONE }
    }

    fn mouse_move(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    //=====================================================================
    // Snapshot Identity
    //=====================================================================

    #[test]
    fn unchanged_tick_reuses_snapshot() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::KeyW)]);
        tracker.snapshot();
        let first = tracker.snapshot();

        tracker.process_events(&[]);
        let second = tracker.snapshot();

        assert!(Arc::ptr_eq(&first, &second), "No change should alias the same snapshot");
    }

    #[test]
    fn changed_tick_produces_new_snapshot() {
        let mut tracker = StateTracker::new();

        let first = tracker.snapshot();
        tracker.process_events(&[key_down(KeyCode::KeyW)]);
        let second = tracker.snapshot();

        assert!(!Arc::ptr_eq(&first, &second));
        assert!(!first.is_key_down(KeyCode::KeyW), "Old snapshot must not change");
        assert!(second.is_key_down(KeyCode::KeyW));
    }

    #[test]
    fn duplicate_key_down_is_not_a_change() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyA)]);
        tracker.snapshot();
        let first = tracker.snapshot();

        tracker.process_events(&[key_down(KeyCode::KeyA)]);
        let second = tracker.snapshot();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn spurious_key_up_is_not_a_change() {
        let mut tracker = StateTracker::new();
        let first = tracker.snapshot();

        tracker.process_events(&[key_up(KeyCode::KeyZ)]);
        let second = tracker.snapshot();

        assert!(Arc::ptr_eq(&first, &second));
    }

    //=====================================================================
    // Held State
    //=====================================================================

    #[test]
    fn fast_tap_within_one_tick_is_recorded() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::Space)]);
        tracker.process_events(&[key_up(KeyCode::Space)]);
        let state = tracker.snapshot();

        assert!(!state.is_key_down(KeyCode::Space));
        assert!(state.was_key_pressed(KeyCode::Space));
        assert!(state.was_key_released(KeyCode::Space));
    }

    #[test]
    fn transitions_clear_on_next_snapshot() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[mouse_down(MouseButton::Left)]);
        let first = tracker.snapshot();
        assert!(first.was_button_pressed(MouseButton::Left));

        let second = tracker.snapshot();
        assert!(!Arc::ptr_eq(&first, &second), "Transitions must not linger");
        assert!(!second.has_transitions());
        assert!(second.is_button_down(MouseButton::Left));

        assert!(Arc::ptr_eq(&second, &tracker.snapshot()));
    }

    #[test]
    fn buttons_tracked_independently_of_keys() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[mouse_down(MouseButton::Left), key_down(KeyCode::KeyE)]);
        let state = tracker.snapshot();

        assert!(state.is_button_down(MouseButton::Left));
        assert!(state.is_key_down(KeyCode::KeyE));
        assert!(!state.is_button_down(MouseButton::Right));
    }

    #[test]
    fn modifiers_follow_latest_event() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[InputEvent::KeyDown {
            key: KeyCode::KeyS,
            modifiers: Modifiers::CTRL,
        }]);
        assert_eq!(tracker.snapshot().modifiers(), Modifiers::CTRL);
    }

    //=====================================================================
    // Motion
    //=====================================================================

    #[test]
    fn mouse_delta_is_relative_to_last_snapshot() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[mouse_move(10.0, 10.0)]);
        let first = tracker.snapshot();
        assert_eq!(first.mouse_delta(), (10.0, 10.0));

        tracker.process_events(&[mouse_move(15.0, 5.0)]);
        let second = tracker.snapshot();
        assert_eq!(second.mouse_delta(), (5.0, -5.0));
        assert_eq!(second.mouse_position(), (15.0, 5.0));
    }

    #[test]
    fn motion_settles_to_zero_then_aliases() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[mouse_move(3.0, 4.0)]);
        tracker.snapshot();

        let settled = tracker.snapshot();
        assert_eq!(settled.mouse_delta(), (0.0, 0.0));

        let idle = tracker.snapshot();
        assert!(Arc::ptr_eq(&settled, &idle));
    }

    #[test]
    fn wheel_deltas_accumulate_within_tick() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[
            InputEvent::MouseWheel { dx: 0.0, dy: 1.0 },
            InputEvent::MouseWheel { dx: 0.0, dy: 2.0 },
        ]);
        assert_eq!(tracker.snapshot().wheel_delta(), (0.0, 3.0));
        assert_eq!(tracker.snapshot().wheel_delta(), (0.0, 0.0));
    }

    //=====================================================================
    // Release All
    //=====================================================================

    #[test]
    fn release_all_clears_held_inputs() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyW), mouse_down(MouseButton::Left)]);
        tracker.process_events(&[mouse_move(50.0, 60.0)]);
        tracker.snapshot();

        tracker.release_all();
        let state = tracker.snapshot();

        assert!(state.is_idle());
        assert!(state.was_key_released(KeyCode::KeyW));
        assert!(state.was_button_released(MouseButton::Left));
        assert_eq!(state.mouse_position(), (50.0, 60.0), "Cursor position is kept");
    }

    #[test]
    fn focus_lost_event_releases_what_came_before_it() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyA), InputEvent::FocusLost, key_down(KeyCode::KeyB)]);
        let state = tracker.snapshot();

        assert!(!state.is_key_down(KeyCode::KeyA));
        assert!(state.is_key_down(KeyCode::KeyB));
    }

    #[test]
    fn release_all_on_idle_tracker_is_noop() {
        let mut tracker = StateTracker::new();
        let first = tracker.snapshot();
        tracker.release_all();
        assert!(Arc::ptr_eq(&first, &tracker.snapshot()));
    }
}
