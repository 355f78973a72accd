//=========================================================================
// Thread Guard
//=========================================================================
//
// Explicit "must run on the designated thread" precondition.
//
// Components that are only valid on one thread (the logic thread for
// trigger evaluation, for instance) hold a `ThreadGuard` and check it at
// the top of the guarded operation. The caller's thread is either read
// from `std::thread::current()` or passed in explicitly with `check()`.
//
// A failed check is a contract violation. It is reported as
// `ThreadError::WrongThread` and the guarded work is not run.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread::{self, ThreadId};

//=== External Crates =====================================================

use log::warn;
use thiserror::Error;

//=== ThreadError =========================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThreadError {
    /// The guarded operation was invoked off its designated thread.
    #[error("{label} must run on thread {expected:?}, called from {actual:?}")]
    WrongThread {
        label: &'static str,
        expected: ThreadId,
        actual: ThreadId,
    },
}

//=== ThreadGuard =========================================================

/// Designates one thread as the only valid caller of an operation.
#[derive(Debug, Clone)]
pub struct ThreadGuard {
    designated: ThreadId,
    label: &'static str,
}

impl ThreadGuard {
    /// Designates the calling thread.
    pub fn current(label: &'static str) -> Self {
        Self::new(thread::current().id(), label)
    }

    /// Designates an explicit thread.
    pub fn new(designated: ThreadId, label: &'static str) -> Self {
        Self { designated, label }
    }

    pub fn designated(&self) -> ThreadId {
        self.designated
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Moves the designation to the calling thread.
    ///
    /// For owners that are built on one thread and then handed to the
    /// thread that will run them.
    pub fn rebind_to_current(&mut self) {
        self.designated = thread::current().id();
    }

    //--- Checks -----------------------------------------------------------

    /// Checks an explicitly supplied caller thread.
    pub fn check(&self, current: ThreadId) -> Result<(), ThreadError> {
        if current == self.designated {
            return Ok(());
        }

        warn!(
            target: "core",
            "{} invoked from {:?}, designated thread is {:?}",
            self.label,
            current,
            self.designated
        );

        Err(ThreadError::WrongThread {
            label: self.label,
            expected: self.designated,
            actual: current,
        })
    }

    /// Checks the calling thread.
    pub fn ensure_current(&self) -> Result<(), ThreadError> {
        self.check(thread::current().id())
    }

    pub fn is_current(&self) -> bool {
        thread::current().id() == self.designated
    }

    /// Runs `f` if called on the designated thread and returns its result
    /// unchanged; otherwise `f` is not run.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> Result<R, ThreadError> {
        self.ensure_current()?;
        Ok(f())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    //=====================================================================
    // Designated Thread
    //=====================================================================

    #[test]
    fn run_on_designated_thread_returns_result_unchanged() {
        let guard = ThreadGuard::current("test");
        assert_eq!(guard.run(|| 42), Ok(42));
        assert_eq!(guard.run(|| "value".to_string()), Ok("value".to_string()));
    }

    #[test]
    fn ensure_current_passes_on_designated_thread() {
        let guard = ThreadGuard::current("test");
        assert!(guard.is_current());
        assert_eq!(guard.ensure_current(), Ok(()));
        assert_eq!(guard.check(thread::current().id()), Ok(()));
    }

    //=====================================================================
    // Other Threads
    //=====================================================================

    #[test]
    fn run_off_designated_thread_is_rejected_without_running() {
        let guard = ThreadGuard::current("render");
        let ran = Arc::new(AtomicBool::new(false));

        let ran_in_thread = Arc::clone(&ran);
        let result = thread::spawn(move || {
            guard.run(|| ran_in_thread.store(true, Ordering::SeqCst))
        })
        .join()
        .expect("guard thread panicked");

        match result {
            Err(ThreadError::WrongThread { label, expected, actual }) => {
                assert_eq!(label, "render");
                assert_ne!(expected, actual);
            }
            other => panic!("Expected WrongThread, got {:?}", other),
        }
        assert!(!ran.load(Ordering::SeqCst), "Guarded work must not run");
    }

    #[test]
    fn explicit_check_with_foreign_thread_id() {
        let guard = ThreadGuard::current("logic");
        let other = thread::spawn(|| thread::current().id())
            .join()
            .expect("id thread panicked");

        let err = guard.check(other).unwrap_err();
        assert!(err.to_string().starts_with("logic must run on thread"));
    }

    #[test]
    fn guard_for_explicit_thread() {
        let worker = thread::spawn(|| thread::current().id())
            .join()
            .expect("id thread panicked");

        let guard = ThreadGuard::new(worker, "worker");
        assert_eq!(guard.designated(), worker);
        assert_eq!(guard.label(), "worker");
        assert!(!guard.is_current());
        assert!(guard.ensure_current().is_err());
    }

    //=====================================================================
    // Rebinding
    //=====================================================================

    #[test]
    fn rebind_moves_designation_to_new_thread() {
        let mut guard = ThreadGuard::current("logic");

        let moved_ok = thread::spawn(move || {
            let before = guard.ensure_current().is_err();
            guard.rebind_to_current();
            before && guard.ensure_current().is_ok()
        })
        .join()
        .expect("guard thread panicked");

        assert!(moved_ok);
    }
}
