// File: crates/charge-monitor/src/main.rs
// Summary: CLI entry point; samples the battery, then writes the charging chart.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use log::{info, warn};

use charge_monitor::cli::{Cli, MonitorConfig, SourceConfig};
use charge_monitor::clock::SystemClock;
use charge_monitor::plot::save_chart;
use charge_monitor::progress::ProgressBar;
use charge_monitor::{ReplaySource, Sampler, StatusSource};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level())).init();

    let stop = cli.stop_condition();
    let config = cli.into_config().context("invalid arguments")?;

    if stop.is_ambiguous() {
        warn!(
            "Both a percentage and time have been specified. Whichever is reached first \
             will cause the program to terminate."
        );
    }

    run(config)
}

fn run(config: MonitorConfig) -> Result<()> {
    let source: Box<dyn StatusSource> = match &config.source {
        SourceConfig::Command(command) => {
            info!("Reading battery status from '{}'", command.command_line());
            Box::new(command.clone())
        }
        SourceConfig::Replay(path) => {
            let replay = ReplaySource::from_path(path)
                .with_context(|| format!("failed to load replay file '{}'", path.display()))?;
            info!("Replaying {} readings from {}", replay.remaining(), replay.path().display());
            Box::new(replay)
        }
    };

    let mut sampler = Sampler::new(source, SystemClock::start(), config.sampler);
    let mut progress = ProgressBar::stderr();
    let recording = sampler.run(&mut progress).context("monitoring loop failed")?;

    if let Some(summary) = recording.summary() {
        info!(
            "{} readings over {:.0}s: percentage {:+.0}, temperature {:.1}-{:.1}C, current peak {:.0}mA mean {:.0}mA",
            summary.readings,
            summary.duration.as_secs_f64(),
            summary.percentage_delta,
            summary.min_temperature,
            summary.max_temperature,
            summary.peak_current_ma,
            summary.mean_current_ma,
        );
    }

    match save_chart(&recording, &config.output_file, &config.render)
        .with_context(|| format!("failed to save chart to '{}'", config.output_file.display()))?
    {
        Some(path) => println!("{}", style(format!("Saving output to {}", path.display())).green()),
        None => warn!("No readings were collected; no chart written."),
    }
    Ok(())
}
