use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Minimum quiet time between outgoing fetches.
///
/// One throttle belongs to one search: it is created together with the
/// frontier and dropped with it, so concurrent searches never share a timer.
/// The first fetch goes through immediately. Every later fetch waits until
/// `min_interval` has passed since the previous fetch [finished](Self::finish),
/// so slow responses never eat into the pause.
#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last_finish: Option<Instant>,
}

impl Throttle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_finish: None,
        }
    }

    fn ready_at(&self) -> Option<Instant> {
        self.last_finish.map(|finished| finished + self.min_interval)
    }

    /// Waits until the next fetch is allowed.
    pub async fn wait(&mut self) {
        if let Some(ready_at) = self.ready_at() {
            sleep_until(ready_at).await;
        }
    }

    /// Like [`wait`](Self::wait), but gives up at `deadline`.
    ///
    /// Returns `false` when the deadline arrives before the next fetch is
    /// allowed; no fetch may be issued then.
    pub async fn wait_until(&mut self, deadline: Instant) -> bool {
        if let Some(ready_at) = self.ready_at() {
            sleep_until(ready_at.min(deadline)).await;
        }
        Instant::now() < deadline
    }

    /// Marks the end of a fetch; the next pause is measured from here.
    pub fn finish(&mut self) {
        self.last_finish = Some(Instant::now());
    }
}
