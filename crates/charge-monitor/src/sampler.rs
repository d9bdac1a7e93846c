// File: crates/charge-monitor/src/sampler.rs
// Summary: Polling loop that reads the battery until the stop condition is met.

use std::time::Duration;

use log::{debug, info};

use crate::clock::Clock;
use crate::error::{Result, StatusError};
use crate::progress::ProgressSink;
use crate::recording::{Recording, Sample};
use crate::status::StatusSource;
use crate::stop::StopCondition;

/// Longest accepted delay between readings (30 minutes).
pub const MAX_INTERVAL_MS: u32 = 1_800_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    pub stop: StopCondition,
    /// Target time between the starts of consecutive readings.
    pub interval: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { stop: StopCondition::default(), interval: Duration::from_millis(1000) }
    }
}

pub struct Sampler<S, C> {
    source: S,
    clock: C,
    config: SamplerConfig,
}

impl<S: StatusSource, C: Clock> Sampler<S, C> {
    pub fn new(source: S, clock: C, config: SamplerConfig) -> Self {
        Self { source, clock, config }
    }

    pub fn clock(&self) -> &C { &self.clock }

    /// Poll until overall progress reaches 100 or a finite source runs dry.
    pub fn run(&mut self, progress: &mut dyn ProgressSink) -> Result<Recording> {
        let mut recording = Recording::new();
        let mut start_percentage = None;
        let mut current_progress = 0u8;

        info!("Starting monitoring loop...");
        while current_progress < 100 {
            let status = match self.source.read() {
                Ok(status) => status,
                Err(StatusError::Exhausted) => {
                    info!("Status source exhausted after {} readings", recording.len());
                    break;
                }
                Err(e) => return Err(e.into()),
            };
            let read_at = self.clock.elapsed();

            let start = *start_percentage.get_or_insert(status.percentage);
            current_progress = self.config.stop.progress(start, status.percentage, read_at);
            info!("Current progress: {current_progress}");
            debug!(
                "reading at {:.1}s: {}% {:.1}C {:.0}mA",
                read_at.as_secs_f64(),
                status.percentage,
                status.temperature,
                status.current_ma()
            );
            progress.update(current_progress, read_at);

            recording.push(Sample {
                elapsed: read_at,
                percentage: status.percentage,
                temperature: status.temperature,
                current_ma: status.current_ma(),
            });

            if current_progress < 100 {
                let spent = self.clock.elapsed().saturating_sub(read_at);
                self.clock.sleep(self.config.interval.saturating_sub(spent));
            }
        }
        progress.finish(self.clock.elapsed());
        info!("Monitoring loop finished.");

        Ok(recording)
    }
}
