// File: crates/charge-monitor/src/cli.rs
// Summary: Command-line arguments and their validation into a run configuration.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};
use clap::Parser;
use stats_chart::{theme, ImageFormat, RenderOptions};

use crate::error::{MonitorError, Result};
use crate::sampler::{SamplerConfig, MAX_INTERVAL_MS};
use crate::status::{CommandSource, DEFAULT_STATUS_COMMAND};
use crate::stop::{StopCondition, MAX_STOP_SECS};

/// Record battery percentage, current and temperature until a stop
/// condition is met, then save them as a chart.
#[derive(Debug, Parser)]
#[command(name = "charge-monitor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The percentage at which to stop recording
    #[arg(short = 'p', long = "percentage", value_name = "0-100", default_value_t = 100,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    pub stop_percentage: u8,

    /// The time (in seconds) after which to stop recording
    #[arg(short = 't', long = "time", value_name = "0-259200",
          value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_STOP_SECS)))]
    pub stop_time: Option<u32>,

    /// The desired time (in milliseconds) between measurements
    #[arg(short = 'i', long = "interval", value_name = "0-1800000", default_value_t = 1000,
          value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_INTERVAL_MS)))]
    pub time_interval: u32,

    /// Path to the output image (.jpg, .png or .webp)
    /// [default: ./Battery_Statistics_<date>_<time>.jpg]
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Print verbose messages (-v for progress, -vv for raw readings)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command printing the battery status as JSON
    #[arg(long, value_name = "COMMAND", default_value = DEFAULT_STATUS_COMMAND)]
    pub status_command: String,

    /// Replay readings from a CSV file instead of running the status command
    #[arg(long, value_name = "CSV", conflicts_with = "status_command")]
    pub replay: Option<PathBuf>,

    /// Chart colour theme
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Image width in pixels
    #[arg(long, default_value_t = stats_chart::types::WIDTH as u32,
          value_parser = clap::value_parser!(u32).range(64..=8192))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = stats_chart::types::HEIGHT as u32,
          value_parser = clap::value_parser!(u32).range(64..=8192))]
    pub height: u32,
}

/// Where readings come from.
#[derive(Clone, Debug)]
pub enum SourceConfig {
    Command(CommandSource),
    Replay(PathBuf),
}

/// Everything a run needs, validated before the first reading.
#[derive(Clone, Debug)]
pub struct MonitorConfig {
    pub sampler: SamplerConfig,
    pub source: SourceConfig,
    pub output_file: PathBuf,
    pub render: RenderOptions,
}

impl Cli {
    /// Log filter for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn stop_condition(&self) -> StopCondition {
        StopCondition::new(
            self.stop_percentage,
            self.stop_time.map(|s| Duration::from_secs(u64::from(s))),
        )
    }

    pub fn into_config(self) -> Result<MonitorConfig> {
        self.into_config_at(Local::now())
    }

    /// Like [`Cli::into_config`] with an explicit time for the default file name.
    pub fn into_config_at(self, now: DateTime<Local>) -> Result<MonitorConfig> {
        let output_file = self
            .output_file
            .clone()
            .unwrap_or_else(|| default_output_file(now));
        // Fail now rather than after hours of sampling.
        ImageFormat::from_path(&output_file)?;

        let theme = theme::find(&self.theme).ok_or_else(|| {
            let names = theme::presets().iter().map(|t| t.name).collect::<Vec<_>>().join(", ");
            MonitorError::UnknownTheme(self.theme.clone(), names)
        })?;

        let source = match &self.replay {
            Some(path) => SourceConfig::Replay(path.clone()),
            None => SourceConfig::Command(
                CommandSource::from_command_line(&self.status_command).ok_or(MonitorError::EmptyCommand)?,
            ),
        };

        let render = RenderOptions {
            width: self.width as i32,
            height: self.height as i32,
            theme,
            ..RenderOptions::default()
        };

        Ok(MonitorConfig {
            sampler: SamplerConfig {
                stop: self.stop_condition(),
                interval: Duration::from_millis(u64::from(self.time_interval)),
            },
            source,
            output_file,
            render,
        })
    }
}

/// `./Battery_Statistics_YYYY-MM-DD_HH-MM-SS.jpg`
pub fn default_output_file(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("./Battery_Statistics_{}.jpg", now.format("%Y-%m-%d_%H-%M-%S")))
}
