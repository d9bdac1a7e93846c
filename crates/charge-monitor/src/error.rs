// File: crates/charge-monitor/src/error.rs
// Summary: Error types for status sources and the monitoring pipeline.

use std::path::PathBuf;

/// Failure to obtain one battery reading.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("failed to run status command '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("status command '{command}' exited with {code}: {stderr}")]
    Failed { command: String, code: String, stderr: String },

    #[error("status output is not valid battery JSON: {output:?}")]
    Parse {
        output: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read replay file '{}'", .path.display())]
    Replay {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A finite source has no more readings.
    #[error("no more readings")]
    Exhausted,
}

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Chart(#[from] stats_chart::ChartError),

    #[error("unknown theme '{0}' (expected one of: {1})")]
    UnknownTheme(String, String),

    #[error("status command is empty")]
    EmptyCommand,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
