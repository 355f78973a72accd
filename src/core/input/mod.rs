//=========================================================================
// Input System
//
// Logic-thread side of input handling.
//
// Responsibilities:
// - Digest batches of input events into immutable per-tick snapshots
// - Pair the previous and current snapshot for trigger evaluation
// - Evaluate triggers per context and report the actions they fire
// - Release held inputs when the window loses focus
//
// Notes:
// `LogicalLayer` is owned and ticked by the CoreSystemsOrchestrator.
// Everything below it is plain data and may be used standalone.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod action;
pub mod conditions;
pub mod event;
pub mod focus;
mod input_state;
mod logical_layer;
mod state_pair;
mod state_tracker;
pub mod trigger;

//=== Re-exports ==========================================================
pub use action::{Action, InputContext};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use focus::{FocusError, FocusLatch, FocusSignalSource};
pub use input_state::InputState;
pub use logical_layer::LogicalLayer;
pub use state_pair::InputStatePair;
pub use state_tracker::StateTracker;
pub use trigger::{ConditionExt, InputTrigger, TriggerCondition};
