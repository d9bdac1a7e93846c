// File: crates/charge-monitor/src/clock.rs
// Summary: Time source for the sampling loop; real or manually advanced.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Time since the clock was started.
    fn elapsed(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock started at construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Clock that only moves when told to. Sleeping advances it instantly.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Duration,
    sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self { Self::default() }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> &[Duration] { &self.sleeps }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.now += duration;
    }
}
