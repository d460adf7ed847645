//! Decides whether a request completion may still write state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::SequencingPolicy;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket {
    seq: u64,
    epoch: u64,
}

impl Ticket {
    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Clone)]
pub(crate) struct RequestSequencer {
    policy: SequencingPolicy,
    latest: Arc<AtomicU64>,
    /// Bumped by `invalidate`; tickets from an older epoch never apply.
    epoch: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub(crate) fn new(policy: SequencingPolicy) -> Self {
        Self {
            policy,
            latest: Arc::new(AtomicU64::new(0)),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) fn policy(&self) -> SequencingPolicy {
        self.policy
    }

    pub(crate) fn issue(&self) -> Ticket {
        Ticket {
            seq: self.latest.fetch_add(1, Ordering::SeqCst) + 1,
            epoch: self.epoch.load(Ordering::SeqCst),
        }
    }

    /// Drop every outstanding ticket regardless of policy.
    pub(crate) fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn accepts(&self, ticket: Ticket) -> bool {
        if ticket.epoch != self.epoch.load(Ordering::SeqCst) {
            return false;
        }
        match self.policy {
            SequencingPolicy::LastCompletion => true,
            SequencingPolicy::LatestRequest => self.latest.load(Ordering::SeqCst) == ticket.seq,
        }
    }
}
