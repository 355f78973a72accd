//=========================================================================
// Input State Pair
//=========================================================================
//
// Read-only view over two successive input snapshots.
//
// The logical layer builds one pair per tick from the previous and the
// current `InputState` and hands it to every trigger condition. The pair
// borrows both states; it cannot outlive the tick that produced it.
//
// Either side may be absent (nothing was published yet), and both sides
// may be the very same instance (nothing changed between ticks). Neither
// case is an error; deciding whether a transition is meaningful is left to
// the conditions.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::ptr;

//=== Internal Dependencies ===============================================

use super::input_state::InputState;

//=== InputStatePair ======================================================

/// Previous and current input snapshots of one tick.
///
/// Construction never fails and performs no validation. The pair defines
/// no equality, hashing or ordering; it is a carrier, not a value.
#[derive(Debug, Clone, Copy)]
pub struct InputStatePair<'a> {
    previous: Option<&'a InputState>,
    current: Option<&'a InputState>,
}

impl<'a> InputStatePair<'a> {
    pub const fn new(previous: Option<&'a InputState>, current: Option<&'a InputState>) -> Self {
        Self { previous, current }
    }

    /// State of the tick before, if one was published.
    pub const fn previous(&self) -> Option<&'a InputState> {
        self.previous
    }

    /// State of this tick, if one was published.
    pub const fn current(&self) -> Option<&'a InputState> {
        self.current
    }

    /// Returns `true` if both sides are present and are the same instance.
    ///
    /// Identity only: two distinct snapshots with equal content are not
    /// aliased.
    pub fn is_aliased(&self) -> bool {
        match (self.previous, self.current) {
            (Some(previous), Some(current)) => ptr::eq(previous, current),
            _ => false,
        }
    }

    /// Both sides, when both are present.
    pub fn both(&self) -> Option<(&'a InputState, &'a InputState)> {
        self.previous.zip(self.current)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
