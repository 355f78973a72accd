//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the logic thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  winit Event Loop        │    │  EventCollector      │
//  │   ↓                      │    │   ↓                  │
//  │  WinitFocusListener ─────┼────┼─► FocusLatch         │
//  │   ↓                      │    │   ↓                  │
//  │  InputProcessor          │    │  LogicalLayer        │
//  │   ↓                      │    │   ├─ StateTracker    │
//  │  InputBuffer             │    │   └─ InputTriggers   │
//  │   ├─ discrete (ordered)  │    │   ↓                  │
//  │   └─ cursor / wheel      │    │  Game tick callback  │
//  │   ↓                      │    └──────────────────────┘
//  │  RedrawRequested (flush) │             ↑
//  │   ↓                      │             │
//  │  bounded channel ────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Frame boundary is `RedrawRequested`: everything buffered since the last
// one is sent as a single message. Empty frames are not sent.
//
// Focus loss takes two routes. The listener sets the shared latch so the
// logic thread sees it on its next tick whatever the channel holds. The
// platform also appends `InputEvent::FocusLost` to the buffer and flushes,
// so input from before the loss can never be applied after the release.
//
// A full channel never blocks the event loop and never loses input: the
// refused frame goes back into the buffer and is merged into the next
// flush. If the logic thread is gone, frames are dropped with a warning
// and the window stays responsive until closed.
//
//=========================================================================

//=== Submodules ==========================================================

mod focus_listener;
mod input_buffer;
mod input_processor;

pub use focus_listener::WinitFocusListener;

//=== External Crates =====================================================

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::{FocusLatch, InputEvent};
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::engine::EngineConfig;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Runs on the main thread (a winit requirement on macOS/iOS). Not `Send`:
/// everything it shares leaves through the channel or the focus latch.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,
    focus: Option<WinitFocusListener>,
    latch: FocusLatch,

    title: String,
    size: (u32, u32),

    buffer: InputBuffer,
    input_processor: InputProcessor,
    event_sender: Sender<PlatformEvent>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(event_sender: Sender<PlatformEvent>, latch: FocusLatch, config: &EngineConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            focus: None,
            latch,
            title: config.window_title.clone(),
            size: config.window_size,
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            event_sender,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop on the calling thread until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// [`PlatformError`] if the event loop cannot be created or fails
    /// while running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends the buffered frame to the logic thread.
    ///
    /// A full channel means the logic thread is behind; the frame is kept
    /// and goes out with the next flush.
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };

        let discrete_count = discrete.len();
        let continuous_count = continuous.len();
        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        match self.event_sender.try_send(PlatformEvent::Inputs { discrete, continuous }) {
            Ok(()) => {}
            Err(TrySendError::Full(frame)) => {
                debug!(
                    target: "platform::input",
                    "Logic thread behind, holding frame ({} discrete, {} continuous)",
                    discrete_count,
                    continuous_count
                );
                if let PlatformEvent::Inputs { discrete, continuous } = frame {
                    self.buffer.requeue(discrete, continuous);
                }
            }
            Err(TrySendError::Disconnected(_)) => warn!(
                target: "platform::input",
                "Channel disconnected, dropping frame ({} discrete, {} continuous)",
                discrete_count,
                continuous_count
            ),
        }
    }

    /// Tells the logic thread to stop. Blocks if the channel is full so the
    /// close is never lost; fails only when the logic thread is gone.
    fn send_window_closed(&self) {
        if self.event_sender.send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Logic thread already stopped");
        }
    }

    fn on_focus_changed(&mut self, window_id: WindowId, event: &WindowEvent) {
        let lost = self
            .focus
            .as_ref()
            .map_or(false, |listener| listener.handle_window_event(window_id, event));

        if lost {
            // Key-up and modifier events for keys released while unfocused
            // never arrive.
            trace!(
                target: "platform::input",
                "Dropping cached modifiers {:?}",
                self.input_processor.modifiers()
            );
            self.input_processor.reset_modifiers();

            self.buffer.push(InputEvent::FocusLost);
            self.flush_input_buffer();
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume and binds the focus listener to
    /// it. Later resumes (mobile) reuse both.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.0, self.size.1));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.send_window_closed();
                event_loop.exit();
                return;
            }
        };

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        match WinitFocusListener::attach(Some(&window), self.latch.clone()) {
            Ok(listener) => self.focus = Some(listener),
            Err(e) => warn!(target: "input::focus", "Focus tracking disabled: {}", e),
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send_window_closed();
                event_loop.exit();
            }

            WindowEvent::Focused(_) => self.on_focus_changed(window_id, &event),

            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", modifiers);
                self.input_processor.update_modifiers(modifiers.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_cursor(position.x, position.y);
                self.buffer.push(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let event = self.input_processor.process_wheel(*delta);
                self.buffer.push(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped or repeated key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push(event);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
