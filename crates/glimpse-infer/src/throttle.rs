use glimpse_base::Clock;
use std::sync::Arc;
use std::time::Duration;

/// Admits at most one event per `min_interval`.
///
/// Holds the time of the last admitted event; a fresh throttle has none and
/// admits the first event immediately. Events inside the window are rejected
/// without changing any state.
pub struct Throttle {
    clock: Arc<dyn Clock>,
    min_interval: Duration,
    last: Option<Duration>,
}

impl Throttle {
    pub fn new(clock: Arc<dyn Clock>, min_interval: Duration) -> Self {
        Self {
            clock,
            min_interval,
            last: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Time of the last admitted event, on the throttle's clock.
    pub fn last(&self) -> Option<Duration> {
        self.last
    }

    /// Admit the event if the window has elapsed, recording it as the last.
    pub fn try_acquire(&mut self) -> bool {
        let now = self.clock.now();
        if let Some(last) = self.last {
            if now.saturating_sub(last) < self.min_interval {
                return false;
            }
        }
        self.last = Some(now);
        true
    }

    /// Forget the last event so the next one is admitted.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
