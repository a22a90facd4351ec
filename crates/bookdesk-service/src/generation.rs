//! Request-generation guard.
//!
//! Every fetch takes a ticket before awaiting the backend. When the response
//! arrives, it is applied only if no newer fetch has started since; older
//! responses are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request counter owned by one controller.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

/// Ticket identifying one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl RequestGeneration {
    /// Creates a counter at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` belongs to the most recent request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::Acquire) == ticket.0
    }
}
