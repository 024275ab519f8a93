//! Exclusive-run guard
//!
//! A roster build rewrites the individual sheet in place, so only one build
//! may run at a time within the process. The guard is process-wide; holding
//! it does not lock the files themselves.

use std::sync::atomic::{AtomicBool, Ordering};

static IN_USE: AtomicBool = AtomicBool::new(false);

/// Held while a build is running; released on drop
#[derive(Debug)]
pub struct RunGuard {
    _private: (),
}

impl RunGuard {
    /// Try to take the guard; `None` if a build is already in progress
    pub fn acquire() -> Option<Self> {
        if IN_USE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Some(Self { _private: () })
        } else {
            None
        }
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        IN_USE.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_is_exclusive_and_released_on_drop() {
        let guard = RunGuard::acquire().expect("guard should be free");
        assert!(RunGuard::acquire().is_none());
        drop(guard);
        assert!(RunGuard::acquire().is_some());
    }
}
