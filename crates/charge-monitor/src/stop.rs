// File: crates/charge-monitor/src/stop.rs
// Summary: Dual stop condition (battery percentage or elapsed time) as 0..=100 progress.

use std::time::Duration;

/// Longest accepted stop time (three days).
pub const MAX_STOP_SECS: u32 = 259_200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StopCondition {
    /// Battery percentage that ends the run (0..=100).
    pub percentage: u8,
    /// Elapsed time that ends the run.
    pub time: Option<Duration>,
}

impl Default for StopCondition {
    fn default() -> Self {
        Self { percentage: 100, time: None }
    }
}

impl StopCondition {
    pub fn new(percentage: u8, time: Option<Duration>) -> Self {
        Self { percentage: percentage.min(100), time }
    }

    /// Both a non-default percentage and a time were given; whichever is
    /// reached first ends the run.
    pub fn is_ambiguous(&self) -> bool {
        self.time.is_some() && self.percentage != 100
    }

    /// Progress towards the percentage target.
    ///
    /// When the first reading is at or below the target the battery is
    /// expected to charge and progress is `pct / target`. When the first
    /// reading is above the target it is expected to discharge and progress
    /// is the fraction of the way from `start` down to the target.
    pub fn percentage_progress(&self, start: u32, pct: u32) -> u8 {
        let target = u32::from(self.percentage);
        let (start, pct) = (start.min(100), pct.min(100));
        let raw = if start > target {
            start.saturating_sub(pct) * 100 / (start - target)
        } else if target == 0 {
            100
        } else {
            pct * 100 / target
        };
        raw.min(100) as u8
    }

    /// Progress towards the time limit; 0 when no limit is set.
    pub fn time_progress(&self, elapsed: Duration) -> u8 {
        match self.time {
            None => 0,
            Some(limit) if limit.is_zero() => 100,
            Some(limit) => {
                let ratio = elapsed.as_secs_f64() / limit.as_secs_f64();
                (ratio * 100.0).floor().clamp(0.0, 100.0) as u8
            }
        }
    }

    /// Overall progress: the further along of the two conditions, capped at 100.
    pub fn progress(&self, start: u32, pct: u32, elapsed: Duration) -> u8 {
        self.time_progress(elapsed)
            .max(self.percentage_progress(start, pct))
            .min(100)
    }
}
