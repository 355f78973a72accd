//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform layer (winit) and the logic thread.
//
// Components:
// - `interface`: event and error types crossing the boundary
// - `event_collector`: logic-side, per-tick draining of the channel
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
