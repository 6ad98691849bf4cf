use std::time::{Duration, Instant};

/// Single persistent repeating timer driven by the caller's clock.
///
/// Holds at most one due instant. Changing the interval replaces that
/// instant, so a swap can neither fire twice nor lose the next tick. Time is
/// passed in by the caller, which keeps the scheduler deterministic in tests.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickScheduler {
    /// Creates a stopped scheduler.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Starts firing every `interval`, the first time one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Replaces the interval and, when running, restarts the countdown from
    /// `now`.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.is_running() {
            self.start(now);
        }
    }

    /// Stops the scheduler; `poll` returns false until the next `start`.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Returns true once per elapsed interval and schedules the next firing.
    ///
    /// Firings stay on a fixed beat measured from the previous due instant,
    /// so a slightly late poll does not push later ticks back. When a whole
    /// interval was missed the beat restarts from `now`: a stalled caller
    /// catches up with a single tick instead of a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due + self.interval;
                self.next_due = Some(if next > now { next } else { now + self.interval });
                true
            }
            _ => false,
        }
    }

    /// Time left until the next firing; `None` while stopped.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
