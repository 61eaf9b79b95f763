use std::time::{Duration, Instant};

/// A repeating timer that the UI loop polls once per frame.
///
/// A late poll fires once; missed periods are not replayed. Once cancelled
/// it never fires again.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Instant,
    cancelled: bool,
}

impl RepeatingTimer {
    /// First fire is one period after `start`.
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next_due: start + period,
            cancelled: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn set_period(&mut self, period: Duration, now: Instant) {
        self.period = period;
        self.next_due = now + period;
    }

    /// Returns `true` when a tick is due, rescheduling one period from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.cancelled || now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }

    /// Time left until the next tick, `None` once cancelled.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if self.cancelled {
            None
        } else {
            Some(self.next_due.saturating_duration_since(now))
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Turn the configured tick period into a usable duration.
pub fn tick_period(secs: f32) -> Duration {
    if !secs.is_finite() || secs <= 0.0 {
        tracing::warn!("tick period {secs}s is invalid; using 1s");
        return Duration::from_secs(1);
    }
    Duration::from_secs_f32(secs.clamp(0.1, 5.0))
}
