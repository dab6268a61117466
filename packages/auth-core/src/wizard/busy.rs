use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::AuthError;

/// Shared "request in flight" flag. Hosts hold a clone to disable their
/// submit control while the wizard is waiting on the backend.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Claim the flag for one call. Fails if a call is already running.
    pub fn acquire(&self) -> Result<BusyGuard, AuthError> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| BusyGuard(self.0.clone()))
            .map_err(|_| AuthError::Busy)
    }
}

/// Releases the flag on drop, including when the call's future is dropped.
#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
