//! Main loop rate limiting.

use std::time::{Duration, Instant};

/// Caps a loop at a fixed number of iterations per second by sleeping
/// away whatever is left of each frame's budget.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    budget: Duration,
    last_tick: Option<Instant>,
}

impl FrameLimiter {
    /// Creates a limiter for `rate` iterations per second. A rate of zero
    /// is treated as one.
    #[must_use]
    pub fn new(rate: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / rate.max(1),
            last_tick: None,
        }
    }

    /// Length of one frame.
    #[must_use]
    pub const fn budget(&self) -> Duration {
        self.budget
    }

    /// How much of the current frame is left at `now`.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.last_tick.map_or(Duration::ZERO, |last| {
            self.budget
                .saturating_sub(now.saturating_duration_since(last))
        })
    }

    /// Blocks until the current frame's budget is spent, then starts the
    /// next frame. The first call never waits.
    pub fn tick(&mut self) {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.last_tick = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_matches_rate() {
        assert_eq!(FrameLimiter::new(100).budget(), Duration::from_millis(10));
        assert_eq!(FrameLimiter::new(0).budget(), Duration::from_secs(1));
    }

    #[test]
    fn first_tick_does_not_wait() {
        let mut limiter = FrameLimiter::new(1);
        assert_eq!(limiter.remaining(Instant::now()), Duration::ZERO);
        let start = Instant::now();
        limiter.tick();
        assert!(start.elapsed() < limiter.budget());
    }

    #[test]
    fn consecutive_ticks_are_spaced_by_the_budget() {
        let mut limiter = FrameLimiter::new(200);
        limiter.tick();
        let start = Instant::now();
        limiter.tick();
        let elapsed = start.elapsed();
        assert!(elapsed + Duration::from_millis(1) >= limiter.budget(), "elapsed {elapsed:?}");
    }

    #[test]
    fn remaining_shrinks_after_a_tick() {
        let mut limiter = FrameLimiter::new(10);
        limiter.tick();
        let remaining = limiter.remaining(Instant::now());
        assert!(remaining <= limiter.budget());
        assert_eq!(
            limiter.remaining(Instant::now() + Duration::from_secs(1)),
            Duration::ZERO
        );
    }
}
