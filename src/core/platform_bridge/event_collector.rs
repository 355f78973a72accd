//=========================================================================
// Event Collector
//=========================================================================
//
// Logic-side draining of the platform channel, once per tick.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_tick() → input batches → LogicalLayer
//
// Draining is bounded so a flooded channel cannot stall a tick; whatever
// is left is picked up next tick, in order.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Logic loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
    max_events_per_tick: usize,
}

impl EventCollector {
    pub(crate) const DEFAULT_MAX_EVENTS_PER_TICK: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self::with_limit(receiver, Self::DEFAULT_MAX_EVENTS_PER_TICK)
    }

    pub(crate) fn with_limit(receiver: Receiver<PlatformEvent>, max_events_per_tick: usize) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
            max_events_per_tick: max_events_per_tick.max(1),
        }
    }

    /// Drains pending platform messages into this tick's batches.
    ///
    /// Returns `Exit` on `WindowClosed` or when the platform hung up.
    pub(crate) fn collect_tick(&mut self) -> TickControl {
        self.input_batches.clear();
        let mut drained = 0;

        while drained < self.max_events_per_tick {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    if !discrete.is_empty() {
                        self.input_batches.push(discrete);
                    }
                    if !continuous.is_empty() {
                        self.input_batches.push(continuous);
                    }
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => {
                    trace!(target: "core", "Window closed message received");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= self.max_events_per_tick {
            warn!(target: "core", "Platform backlog: drained {} messages this tick, rest deferred", drained);
        }

        TickControl::Continue
    }

    /// Input batches collected by the last `collect_tick`.
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};
    use crossbeam_channel::{bounded, unbounded};

    fn key_frame(key: KeyCode) -> PlatformEvent {
        PlatformEvent::Inputs {
            discrete: vec![InputEvent::KeyDown { key, modifiers: Modifiers::NONE }],
            continuous: vec![],
        }
    }

    #[test]
    fn empty_queue_continues_with_no_batches() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_tick(), TickControl::Continue);
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn discrete_and_continuous_become_separate_batches() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(key_frame(KeyCode::KeyA)).unwrap();
        tx.send(PlatformEvent::Inputs {
            discrete: vec![],
            continuous: vec![InputEvent::MouseMoved { x: 10.0, y: 20.0 }],
        })
        .unwrap();

        assert_eq!(collector.collect_tick(), TickControl::Continue);
        assert_eq!(collector.batches().len(), 2);
        assert_eq!(collector.batches()[1], vec![InputEvent::MouseMoved { x: 10.0, y: 20.0 }]);
    }

    #[test]
    fn window_closed_exits() {
        let (tx, rx) = bounded(4);
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_tick(), TickControl::Exit);
    }

    #[test]
    fn disconnect_exits() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_tick(), TickControl::Exit);
    }

    #[test]
    fn batches_reset_every_tick() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(key_frame(KeyCode::Space)).unwrap();
        collector.collect_tick();
        assert_eq!(collector.batches().len(), 1);

        collector.collect_tick();
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn backlog_is_deferred_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::with_limit(rx, 2);

        tx.send(key_frame(KeyCode::KeyA)).unwrap();
        tx.send(key_frame(KeyCode::KeyB)).unwrap();
        tx.send(key_frame(KeyCode::KeyC)).unwrap();

        collector.collect_tick();
        assert_eq!(collector.batches().len(), 2);

        collector.collect_tick();
        assert_eq!(
            collector.batches(),
            &[vec![InputEvent::KeyDown { key: KeyCode::KeyC, modifiers: Modifiers::NONE }]]
        );
    }
}
