//=========================================================================
// Winit Focus Listener
//=========================================================================
//
// winit adapter for the focus signal.
//
// Architecture:
//   Main thread:   WindowEvent::Focused(false) → handle_window_event()
//                    → FocusLatch::signal_lost()
//   Logic thread:  get_and_clear_focus_lost() (through a latch clone)
//
// The listener is bound to exactly one window at construction; events for
// any other window are ignored.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};
use winit::event::WindowEvent;
use winit::window::{Window, WindowId};

//=== Internal Dependencies ===============================================

use crate::core::input::{FocusError, FocusLatch, FocusSignalSource};

//=== WinitFocusListener ==================================================

#[derive(Debug, Clone)]
pub struct WinitFocusListener {
    window_id: WindowId,
    latch: FocusLatch,
}

impl WinitFocusListener {
    /// Binds to `window`. Fails with `MissingSurface` when there is none.
    pub fn attach(window: Option<&Window>, latch: FocusLatch) -> Result<Self, FocusError> {
        let window = window.ok_or(FocusError::MissingSurface)?;
        Ok(Self::attach_id(window.id(), latch))
    }

    /// Binds to a window by id.
    pub fn attach_id(window_id: WindowId, latch: FocusLatch) -> Self {
        debug!(target: "input::focus", "Focus listener attached to {:?}", window_id);
        Self { window_id, latch }
    }

    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    /// A handle on the flag, for the polling side.
    pub fn latch(&self) -> &FocusLatch {
        &self.latch
    }

    /// Feeds one window event. Returns `true` if it signalled a focus loss.
    pub fn handle_window_event(&self, window_id: WindowId, event: &WindowEvent) -> bool {
        if window_id != self.window_id {
            return false;
        }

        match event {
            WindowEvent::Focused(false) => {
                info!(target: "input::focus", "Window {:?} lost focus", window_id);
                self.latch.signal_lost();
                true
            }
            _ => false,
        }
    }
}

impl FocusSignalSource for WinitFocusListener {
    fn get_and_clear_focus_lost(&self) -> bool {
        self.latch.get_and_clear()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
