//=========================================================================
// Aetheric Engine
//
// Entry point: configuration, initialization and the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(on_tick)──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init(|systems| ...)
//         ├─ with_channel_capacity() └─ run: spawns logic thread,
//         ├─ with_title()                 runs platform on this thread,
//         └─ with_window_size()           blocks until the window closes
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, FocusLatch};
use crate::core::platform_bridge::PlatformError;
use crate::core::{CoreSystemsOrchestrator, EngineSystems};
use crate::platform::Platform;

//=== EngineConfig ========================================================

/// Plain engine settings, as assembled by [`EngineBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Logic ticks per second.
    pub tps: f64,
    /// Frames the platform may queue ahead of the logic thread.
    pub channel_capacity: usize,
    pub window_title: String,
    /// Logical window size (width, height).
    pub window_size: (u32, u32),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window_title: "Aetheric Engine".to_owned(),
            window_size: (800, 600),
        }
    }
}

//=== EngineBuilder =======================================================

/// Fluent configuration of an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0
/// - **Channel capacity**: 128 frames
/// - **Window**: "Aetheric Engine", 800x600
///
/// # Examples
///
/// ```no_run
/// use aetheric_input::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump }
/// impl Action for GameAction {}
///
/// EngineBuilder::<GameAction>::new()
///     .with_tps(120.0)
///     .with_title("Sandbox")
///     .build()
///     .init(|systems| {
///         systems
///             .input
///             .register_trigger(InputTrigger::new(KeyPressed(KeyCode::Space), GameAction::Jump));
///     })
///     .run(|actions, _systems| {
///         for action in actions {
///             println!("{:?}", action);
///         }
///     })
///     .expect("engine failed");
/// ```
pub struct EngineBuilder<A: Action> {
    config: EngineConfig,
    _phantom: std::marker::PhantomData<A>,
}

impl<A: Action> EngineBuilder<A> {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not a positive finite number.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0 && tps.is_finite(), "TPS must be positive, got {}", tps);
        self.config.tps = tps;
        self
    }

    /// Capacity of the platform → logic channel, in frames. When full, the
    /// platform keeps buffering and sends the merged frame once there is
    /// room, so the window never stalls.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.window_title = title.into();
        self
    }

    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.config.window_size = (width, height);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn build(self) -> Engine<A> {
        info!(
            target: "core",
            "Building engine (TPS: {}, channel: {})",
            self.config.tps,
            self.config.channel_capacity
        );

        Engine {
            config: self.config,
            systems: EngineSystems::new(),
        }
    }
}

impl<A: Action> Default for EngineBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Engine runtime.
///
/// # Architecture
///
/// ```text
/// Engine (main thread)
///   ├─► CoreSystemsOrchestrator (logic thread @ TPS)
///   │     └─► LogicalLayer → on_tick(actions, systems)
///   │
///   └─► Platform (winit event loop, main thread)
///         └─► Window, input buffering, focus listener
///
/// Communication: bounded channel (PlatformEvent) + focus latch
/// ```
pub struct Engine<A: Action> {
    config: EngineConfig,
    systems: EngineSystems<A>,
}

impl<A: Action> Engine<A> {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    //--- Initialization ---------------------------------------------------

    /// Configures the systems (triggers, contexts, resource locators)
    /// before the engine starts.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut EngineSystems<A>),
    {
        info!(target: "core", "Initializing engine systems");
        init_fn(&mut self.systems);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs until the window is closed. Must be called on the main thread.
    ///
    /// `on_tick` runs on the logic thread once per tick with the actions
    /// fired that tick, in trigger registration order.
    ///
    /// # Lifecycle
    ///
    /// 1. Wires the focus latch between platform and logical layer
    /// 2. Creates the bounded channel
    /// 3. Spawns the logic thread
    /// 4. Runs the platform event loop (blocks)
    /// 5. Joins the logic thread
    ///
    /// # Errors
    ///
    /// [`PlatformError`] if the logic thread or the event loop cannot be
    /// started, or the event loop fails.
    pub fn run<F>(mut self, on_tick: F) -> Result<(), PlatformError>
    where
        F: FnMut(&[A], &mut EngineSystems<A>) + Send + 'static,
    {
        info!(target: "core", "Starting engine runtime (TPS: {})", self.config.tps);

        //--- 1. Focus wiring ---------------------------------------------
        let latch = FocusLatch::new();
        self.systems.input.set_focus_source(Box::new(latch.clone()));

        //--- 2. Communication channel ------------------------------------
        let (tx, rx) = bounded(self.config.channel_capacity);

        //--- 3. Logic thread ---------------------------------------------
        let core_handle = CoreSystemsOrchestrator::new(self.systems)
            .spawn_core_thread(rx, self.config.tps, on_tick)
            .map_err(PlatformError::LogicThreadSpawn)?;

        //--- 4. Platform -------------------------------------------------
        let result = Platform::new(tx, latch, &self.config).run();
        if let Err(e) = &result {
            error!(target: "platform", "Platform error: {}", e);
        }
        info!(target: "core", "Platform event loop exited");

        //--- 5. Shutdown -------------------------------------------------
        // The platform dropped its sender, so the logic thread sees a
        // disconnect even if `WindowClosed` was never sent.
        if core_handle.join().is_err() {
            error!(target: "core", "Logic thread panicked");
        }

        info!(target: "core", "Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
