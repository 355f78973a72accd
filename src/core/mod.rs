//=========================================================================
// Core Systems Orchestrator
//
// Runs the logic thread.
//
// Responsibilities:
// - Own the engine systems once the engine starts
// - Drain platform events once per tick
// - Evaluate input triggers and hand the fired actions to the game
// - Keep a fixed tick rate (TPS), independent of the display rate
//
// Notes:
// The orchestrator never touches the window. Everything from the platform
// arrives through the bounded channel. Focus loss is additionally polled
// from the shared latch by the logical layer.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod input;
pub(crate) mod platform_bridge;
pub mod resource;
mod systems;
pub mod thread_guard;

pub use systems::EngineSystems;

//=== Standard Library Imports ============================================
use std::io;
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::Receiver;
use log::{error, info, trace};

//=== Internal Imports ====================================================
use input::Action;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

pub(crate) struct CoreSystemsOrchestrator<A: Action> {
    systems: EngineSystems<A>,
}

impl<A: Action> CoreSystemsOrchestrator<A> {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new(systems: EngineSystems<A>) -> Self {
        Self { systems }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Each tick:
    //  1. Collects platform messages (exit on close/disconnect)
    //  2. Runs the logical layer over the collected batches
    //  3. Calls `on_tick` with the fired actions
    //  4. Sleeps out the rest of the tick
    //
    pub(crate) fn spawn_core_thread<F>(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
        mut on_tick: F,
    ) -> io::Result<thread::JoinHandle<()>>
    where
        F: FnMut(&[A], &mut EngineSystems<A>) + Send + 'static,
    {
        let tick_duration = Duration::from_secs_f64(1.0 / tps);

        thread::Builder::new()
            .name("aetheric-logic".into())
            .spawn(move || {
                let mut systems = self.systems;
                systems.input.bind_to_current_thread();

                let mut collector = EventCollector::new(receiver);
                let mut fired: Vec<A> = Vec::with_capacity(8);
                let mut tick: u64 = 0;

                info!(target: "core", "Logic thread running at {} TPS", tps);

                loop {
                    let tick_start = Instant::now();

                    //--- Step 1: Gather platform events --------------------
                    if collector.collect_tick() == TickControl::Exit {
                        info!(target: "core", "Logic thread exiting after {} ticks", tick);
                        break;
                    }

                    //--- Step 2: Evaluate triggers -------------------------
                    match systems.input.check_triggers(collector.batches()) {
                        Ok(actions) => {
                            fired.clear();
                            fired.extend_from_slice(actions);
                        }
                        Err(e) => {
                            error!(target: "core", "Trigger evaluation aborted: {}", e);
                            break;
                        }
                    }

                    //--- Step 3: Game tick --------------------------------
                    on_tick(&fired, &mut systems);
                    tick += 1;

                    //--- Step 4: Fixed pacing -----------------------------
                    let elapsed = tick_start.elapsed();
                    if elapsed < tick_duration {
                        thread::sleep(tick_duration - elapsed);
                    } else {
                        trace!(target: "core", "Tick {} overran by {:?}", tick, elapsed - tick_duration);
                    }
                }
            })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
