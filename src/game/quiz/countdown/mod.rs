use std::time::Duration;


/// Per-question timer. Advanced by explicit `tick` calls so callers own
/// the clock; once cancelled it ignores every further tick.
#[derive(Clone, Debug)]
pub struct Countdown {
    time_elapsed: Duration,
    time_limit: Duration,
    running: bool,
}

impl Countdown {
    pub fn new(time_limit: Duration) -> Self {
        Countdown {
            time_elapsed: Duration::default(),
            time_limit,
            running: true,
        }
    }

    pub fn stopped(time_limit: Duration) -> Self {
        let mut countdown = Countdown::new(time_limit);
        countdown.cancel();
        countdown
    }

    /// Returns the remaining time before and after the tick, or `None` if
    /// the countdown is not running.
    pub fn tick(&mut self, dt: Duration) -> Option<(Duration, Duration)> {
        if !self.running {
            return None;
        }
        let before = self.remaining();
        self.time_elapsed = (self.time_elapsed + dt).min(self.time_limit);
        Some((before, self.remaining()))
    }

    pub fn cancel(&mut self) {
        self.running = false;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_limit
    }

    pub fn remaining(&self) -> Duration {
        self.time_limit
            .checked_sub(self.time_elapsed)
            .unwrap_or_default()
    }

    /// Whole seconds left, rounded up so a fresh 30s countdown reads 30
    /// until a full second has passed.
    pub fn remaining_seconds(&self) -> u64 {
        let remaining = self.remaining();
        let partial = if remaining.subsec_nanos() > 0 { 1 } else { 0 };
        remaining.as_secs() + partial
    }
}

/// The first warning threshold crossed between two remaining times.
pub fn crossed_warning(
    warnings: &[Duration],
    before: Duration,
    after: Duration,
) -> Option<Duration> {
    warnings
        .iter()
        .filter(|w| before > **w && after <= **w)
        .min()
        .copied()
}
