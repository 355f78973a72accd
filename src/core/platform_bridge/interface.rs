//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// These are the only messages that cross from the main thread to the
// logic thread. Focus loss is latched through the `FocusSignalSource` and
// also travels in-stream as `InputEvent::FocusLost`, after the input that
// preceded it.
//
//=========================================================================

//=== External Crates =====================================================

use thiserror::Error;
use winit::error::EventLoopError;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core over the bounded channel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformEvent {
    /// One frame of buffered input. Never sent empty.
    Inputs {
        /// Key and button transitions, in arrival order.
        discrete: Vec<InputEvent>,
        /// At most one `MouseMoved` (last position) and one summed
        /// `MouseWheel`.
        continuous: Vec<InputEvent>,
    },

    /// Window close requested, or the window could not be created.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Fatal platform failures. If the event loop cannot run, neither can the
/// engine.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),

    #[error("logic thread could not be spawned: {0}")]
    LogicThreadSpawn(#[source] std::io::Error),
}

//=========================================================================
// Unit Tests
//=========================================================================
