// File: crates/charge-monitor/src/lib.rs
// Summary: Library root; sampling pipeline shared by the binary and tests.

//! # Charge Monitor
//!
//! Polls a battery status command at a fixed interval until a percentage or
//! elapsed-time stop condition is met, then renders the collected
//! percentage, current and temperature readings as a three-panel chart.
//!
//! The pipeline is linear:
//!
//! 1. [`cli::Cli`] is validated into a [`cli::MonitorConfig`];
//! 2. a [`sampler::Sampler`] polls a [`status::StatusSource`] into a
//!    [`recording::Recording`];
//! 3. [`plot::save_chart`] renders the recording with `stats-chart`.

pub mod cli;
pub mod clock;
pub mod error;
pub mod plot;
pub mod progress;
pub mod recording;
pub mod sampler;
pub mod status;
pub mod stop;

pub use error::{MonitorError, Result, StatusError};
pub use recording::{Recording, Sample};
pub use sampler::{Sampler, SamplerConfig};
pub use status::{BatteryStatus, CommandSource, ReplaySource, StatusSource};
pub use stop::StopCondition;
