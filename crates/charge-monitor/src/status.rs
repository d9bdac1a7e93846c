// File: crates/charge-monitor/src/status.rs
// Summary: Battery status model and the sources that produce readings.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;
use serde::Deserialize;

use crate::error::StatusError;

/// Program queried for readings when none is configured.
pub const DEFAULT_STATUS_COMMAND: &str = "termux-battery-status";

/// One reading as reported by `termux-battery-status`.
///
/// `current` is in microamperes and negative while charging.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BatteryStatus {
    pub percentage: u32,
    pub temperature: f64,
    pub current: i64,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub plugged: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl BatteryStatus {
    /// Parse the JSON document printed by the status command.
    pub fn from_json(output: &str) -> Result<Self, StatusError> {
        serde_json::from_str(output).map_err(|source| StatusError::Parse {
            output: output.trim().to_string(),
            source,
        })
    }

    /// Current in milliamperes, positive while charging.
    pub fn current_ma(&self) -> f64 {
        -(self.current as f64 / 1000.0)
    }
}

/// Anything that can produce battery readings on demand.
pub trait StatusSource {
    fn read(&mut self) -> Result<BatteryStatus, StatusError>;
}

impl<S: StatusSource + ?Sized> StatusSource for Box<S> {
    fn read(&mut self) -> Result<BatteryStatus, StatusError> {
        (**self).read()
    }
}

/// Runs an external program and parses its stdout as a [`BatteryStatus`].
#[derive(Clone, Debug)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new<I, A>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// Split a command line on whitespace; `None` when it is blank.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for CommandSource {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_COMMAND, Vec::<String>::new())
    }
}

impl StatusSource for CommandSource {
    fn read(&mut self) -> Result<BatteryStatus, StatusError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| StatusError::Spawn { command: self.command_line(), source })?;

        if !output.status.success() {
            let code = output
                .status
                .code()
                .map(|c| format!("status {c}"))
                .unwrap_or_else(|| "a signal".to_string());
            return Err(StatusError::Failed {
                command: self.command_line(),
                code,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("{} -> {}", self.program, stdout.trim());
        BatteryStatus::from_json(&stdout)
    }
}

/// Replays readings from a CSV file with a `percentage,temperature,current`
/// header, one row per reading.
#[derive(Debug)]
pub struct ReplaySource {
    path: PathBuf,
    rows: std::vec::IntoIter<BatteryStatus>,
}

impl ReplaySource {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StatusError> {
        let path = path.as_ref().to_path_buf();
        let wrap = |source: csv::Error| StatusError::Replay { path: path.clone(), source };
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(wrap)?;
        let rows = rdr
            .deserialize::<BatteryStatus>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(wrap)?;
        debug!("loaded {} replay rows from {}", rows.len(), path.display());
        Ok(Self::from_readings(path, rows))
    }

    pub fn from_readings(path: impl Into<PathBuf>, readings: Vec<BatteryStatus>) -> Self {
        Self { path: path.into(), rows: readings.into_iter() }
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn remaining(&self) -> usize { self.rows.len() }
}

impl StatusSource for ReplaySource {
    fn read(&mut self) -> Result<BatteryStatus, StatusError> {
        self.rows.next().ok_or(StatusError::Exhausted)
    }
}
