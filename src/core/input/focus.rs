//=========================================================================
// Focus Signal
//=========================================================================
//
// Turns asynchronous focus-loss notifications into a polled, latched flag.
//
// Architecture:
//   Platform thread ── signal_lost() ──► AtomicBool ◄── get_and_clear() ── Logic thread
//
// The flag is the only piece of shared mutable state between the platform
// and logic threads. Setting uses `Release`, read-and-clear is a single
// `swap` with `AcqRel`, so a loss signalled right after a clear is seen on
// the next poll rather than dropped.
//
// Toolkit adapters (see `platform::focus_listener` for winit) own a
// `FocusLatch` and set it; the logic thread only ever sees the
// `FocusSignalSource` trait.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

//=== External Crates =====================================================

use thiserror::Error;

//=== FocusSignalSource ===================================================

/// Polled "focus lost since last check" signal.
///
/// One implementation per windowing toolkit; the logic loop depends only on
/// this trait.
pub trait FocusSignalSource: Send + Sync {
    /// Returns whether focus was lost since the previous call, and resets
    /// the flag.
    fn get_and_clear_focus_lost(&self) -> bool;
}

//=== FocusError ==========================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FocusError {
    /// The window the listener should bind to does not exist.
    #[error("focus listener requires a window to attach to")]
    MissingSurface,
}

//=== FocusLatch ==========================================================

/// Shared latched flag. Clones observe and modify the same flag.
#[derive(Debug, Clone, Default)]
pub struct FocusLatch {
    lost: Arc<AtomicBool>,
}

impl FocusLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a focus loss.
    pub fn signal_lost(&self) {
        self.lost.store(true, Ordering::Release);
    }

    /// Atomically reads the flag and resets it to `false`.
    pub fn get_and_clear(&self) -> bool {
        self.lost.swap(false, Ordering::AcqRel)
    }

    /// Reads the flag without clearing it.
    pub fn is_set(&self) -> bool {
        self.lost.load(Ordering::Acquire)
    }
}

impl FocusSignalSource for FocusLatch {
    fn get_and_clear_focus_lost(&self) -> bool {
        self.get_and_clear()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn fresh_latch_is_clear() {
        let latch = FocusLatch::new();
        assert!(!latch.is_set());
        assert!(!latch.get_and_clear_focus_lost());
    }

    #[test]
    fn loss_is_reported_exactly_once() {
        let latch = FocusLatch::new();
        latch.signal_lost();

        assert!(latch.get_and_clear_focus_lost());
        assert!(!latch.get_and_clear_focus_lost());
    }

    #[test]
    fn repeated_losses_collapse_into_one() {
        let latch = FocusLatch::new();
        latch.signal_lost();
        latch.signal_lost();

        assert!(latch.get_and_clear());
        assert!(!latch.get_and_clear());
    }

    #[test]
    fn is_set_does_not_clear() {
        let latch = FocusLatch::new();
        latch.signal_lost();
        assert!(latch.is_set());
        assert!(latch.is_set());
        assert!(latch.get_and_clear());
    }

    #[test]
    fn clones_share_the_flag() {
        let writer = FocusLatch::new();
        let reader = writer.clone();

        writer.signal_lost();
        assert!(reader.get_and_clear());
        assert!(!writer.is_set());
    }

    #[test]
    fn loss_from_another_thread_is_visible() {
        let latch = FocusLatch::new();
        let writer = latch.clone();

        thread::spawn(move || writer.signal_lost())
            .join()
            .expect("writer thread panicked");

        assert!(latch.get_and_clear_focus_lost());
    }

    #[test]
    fn concurrent_signals_are_never_all_dropped() {
        let latch = FocusLatch::new();
        let (signalled_tx, signalled_rx) = crossbeam_channel::bounded::<()>(0);
        let (cleared_tx, cleared_rx) = crossbeam_channel::bounded::<()>(0);

        let writer = latch.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                writer.signal_lost();
                if signalled_tx.send(()).is_err() || cleared_rx.recv().is_err() {
                    break;
                }
            }
        });

        let mut observed = 0;
        for _ in 0..100 {
            signalled_rx.recv().expect("writer hung up early");
            if latch.get_and_clear_focus_lost() {
                observed += 1;
            }
            cleared_tx.send(()).expect("writer hung up early");
        }
        handle.join().expect("writer thread panicked");

        assert_eq!(observed, 100, "Every signalled loss must be observed");
    }

    #[test]
    fn trait_object_is_usable() {
        let latch = FocusLatch::new();
        let source: Box<dyn FocusSignalSource> = Box::new(latch.clone());
        latch.signal_lost();
        assert!(source.get_and_clear_focus_lost());
    }

    #[test]
    fn missing_surface_message() {
        assert_eq!(
            FocusError::MissingSurface.to_string(),
            "focus listener requires a window to attach to"
        );
    }
}
