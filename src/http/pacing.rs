//! Request pacing — a minimum-interval gate between consecutive calls.

use async_lock::Mutex;
use std::time::{Duration, Instant};

/// Spaces calls on one client at least `min_interval` apart.
///
/// The clock is stamped immediately before the caller issues its request,
/// so the interval is honored even when the request that follows fails.
/// Concurrent callers serialize on the internal mutex: a second caller
/// blocks for the remaining interval, it is not rejected.
pub struct Pacer {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl Pacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Waits out the remainder of the interval since the previous call,
    /// then stamps the clock.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                futures_timer::Delay::new(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
