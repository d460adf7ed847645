//! Lifetime scope shared by a controller and the requests it spawns.
//!
//! Closing the scope wakes every in-flight request so it stops waiting on the
//! network, and makes any completion that still slips through a no-op.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

pub struct ControllerScope {
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ControllerScope {
    pub fn new() -> Self {
        Self {
            closed: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Close the scope. Idempotent.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Create a handle for a spawned request.
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            closed: Arc::clone(&self.closed),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ControllerScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for checking scope state from a request task.
#[derive(Clone)]
pub struct ScopeHandle {
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Resolves once the owning scope is closed.
    pub async fn closed(&self) {
        // Register with Notify before checking the flag: a close() landing
        // between the check and the await would otherwise be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_closed() {
            return;
        }
        notified.await;
    }
}
