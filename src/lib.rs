//=========================================================================
// Aetheric Input Library Root
//
// Input triggers and resource location for the Aetheric engine.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the input layer: paired snapshots, triggers, focus signal
// - Expose resource locators and their registry
// - Keep the winit platform layer internal
//
// Typical usage:
// ```no_run
// use aetheric_input::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum GameAction { Jump }
// impl Action for GameAction {}
//
// fn main() -> Result<(), PlatformError> {
//     EngineBuilder::<GameAction>::new()
//         .build()
//         .run(|_actions, _systems| {})
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that runs on the logic thread and is usable
// without a window (input, resources, thread guard).
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit event loop and window; only the focus
// listener is public.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------
pub use crate::core::platform_bridge::PlatformError;
pub use crate::core::EngineSystems;
pub use engine::{Engine, EngineBuilder, EngineConfig};
pub use platform::WinitFocusListener;
