//! Input debouncing for search fields

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Lets only the latest of a burst of inputs through
///
/// Each input takes a [`DebounceTicket`]; a ticket is stale as soon as a newer
/// one is issued. Clones share the same ticket counter.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    latest: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a new input, superseding every earlier ticket
    pub fn ticket(&self) -> DebounceTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        DebounceTicket {
            generation,
            delay: self.delay,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Take a ticket and wait it out
    pub async fn settle(&self) -> bool {
        self.ticket().settle().await
    }
}

/// One debounced input
///
/// Owns its handle on the counter, so waiting on it borrows nothing else.
#[derive(Debug, Clone)]
pub struct DebounceTicket {
    generation: u64,
    delay: Duration,
    latest: Arc<AtomicU64>,
}

impl DebounceTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// No newer input has arrived since this ticket was issued
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }

    /// Wait out the delay; `true` if the ticket is still current afterwards
    pub async fn settle(&self) -> bool {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.is_current()
    }
}
