//=========================================================================
// Action Trait & Input Context
//=========================================================================
//
// Game-defined actions fired by triggers, and the contexts that group
// triggers (gameplay vs menu).
//
// The engine never interprets an action; it only reports which ones fired
// during a tick.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// ```
/// use aetheric_input::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump, Fire }
///
/// impl Action for GameAction {}
/// ```
///
/// `Send + 'static` because fired actions are produced on the logic thread
/// and may be forwarded elsewhere.
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== InputContext ========================================================

/// Identifies which group of triggers is active.
///
/// Only triggers registered under the active context are evaluated.
/// `Primary` and `Custom(0)` are distinct contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputContext {
    /// Default context for core gameplay.
    #[default]
    Primary,

    /// User-defined context (menus, dialogue, vehicles, ...).
    Custom(u32),
}

impl InputContext {
    #[inline]
    pub const fn custom(id: u32) -> Self {
        Self::Custom(id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
