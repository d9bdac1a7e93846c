// File: crates/charge-monitor/src/recording.rs
// Summary: Column store of readings collected during one monitoring run.

use std::time::Duration;

/// One reading, already converted to chart units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub elapsed: Duration,
    pub percentage: u32,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Milliamperes, positive while charging.
    pub current_ma: f64,
}

/// Aligned columns: index `i` of every column belongs to reading `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recording {
    timestamps: Vec<f64>,
    percentage: Vec<f64>,
    temperature: Vec<f64>,
    current: Vec<f64>,
}

impl Recording {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, sample: Sample) {
        self.timestamps.push(sample.elapsed.as_secs_f64());
        self.percentage.push(f64::from(sample.percentage));
        self.temperature.push(sample.temperature);
        self.current.push(sample.current_ma);
    }

    pub fn len(&self) -> usize { self.timestamps.len() }

    pub fn is_empty(&self) -> bool { self.timestamps.is_empty() }

    /// Seconds since the monitoring loop started.
    pub fn timestamps(&self) -> &[f64] { &self.timestamps }

    pub fn percentage(&self) -> &[f64] { &self.percentage }

    pub fn temperature(&self) -> &[f64] { &self.temperature }

    pub fn current(&self) -> &[f64] { &self.current }

    /// Aggregate figures for the end-of-run log, `None` when empty.
    pub fn summary(&self) -> Option<Summary> {
        let first = *self.percentage.first()?;
        let last = *self.percentage.last()?;
        let (min_temp, max_temp) = min_max(&self.temperature);
        let (_, peak_current) = min_max(&self.current);
        let mean_current = self.current.iter().sum::<f64>() / self.len() as f64;
        Some(Summary {
            readings: self.len(),
            duration: Duration::from_secs_f64(self.timestamps.last().copied().unwrap_or(0.0).max(0.0)),
            percentage_delta: last - first,
            min_temperature: min_temp,
            max_temperature: max_temp,
            peak_current_ma: peak_current,
            mean_current_ma: mean_current,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub readings: usize,
    pub duration: Duration,
    pub percentage_delta: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub peak_current_ma: f64,
    pub mean_current_ma: f64,
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
