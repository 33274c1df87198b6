// File: crates/aqi-feed/src/session.rs
// Summary: Epoch guard that discards async results started before the view changed.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Epoch counter shared by everything that may finish late.
#[derive(Clone, Debug, Default)]
pub struct Session {
    epoch: Arc<AtomicU64>,
}

/// Epoch observed when a piece of work started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> Ticket {
        Ticket(self.epoch.load(Ordering::Acquire))
    }

    /// Retire every outstanding ticket (city change, teardown).
    pub fn invalidate(&self) -> Ticket {
        Ticket(self.epoch.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.ticket() == ticket
    }

    /// `Some(value)` if `ticket` is still current, otherwise drop it.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!("discarding stale result from epoch {}", ticket.0);
            None
        }
    }
}

/// Wait `delay`, run `work`, and keep its output only if the session was not
/// invalidated in the meantime.
pub async fn simulate_latency<F: Future>(session: &Session, delay: Duration, work: F) -> Option<F::Output> {
    let ticket = session.ticket();
    tokio::time::sleep(delay).await;
    let out = work.await;
    session.accept(ticket, out)
}
