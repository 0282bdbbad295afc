use std::time::Duration;
use crate::constants::MIN_INTERVAL_MS;

/// Repeating timer driven by frame time. Dropping it cancels it.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    interval: Duration,
    elapsed: Duration,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(MIN_INTERVAL_MS)),
            elapsed: Duration::ZERO,
        }
    }

    /// Adds `dt` seconds and returns how many whole intervals have elapsed.
    /// The remainder carries over to the next call.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.elapsed += Duration::from_secs_f32(dt);

        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
impl IntervalTimer {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
