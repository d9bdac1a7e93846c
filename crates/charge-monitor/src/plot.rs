// File: crates/charge-monitor/src/plot.rs
// Summary: Turns a recording into the three-panel charging chart and saves it.

use std::path::{Path, PathBuf};

use log::debug;
use stats_chart::theme::{TAB_BLUE, TAB_ORANGE, TAB_RED};
use stats_chart::{Color, Figure, Panel, RenderOptions, Series};

use crate::error::Result;
use crate::recording::Recording;

pub const FIGURE_TITLE: &str = "Charging Statistics";

/// Percentage, current and temperature stacked over a shared time axis.
pub fn charging_figure(recording: &Recording) -> Result<Figure> {
    let t = recording.timestamps();
    let panel = |title: &str, y_label: &str, label: &str, ys: &[f64], color: Color| -> Result<Panel> {
        let series = Series::from_columns(label, t, ys)?.with_color(color);
        Ok(Panel::new(title, y_label).with_series(series))
    };

    let mut figure = Figure::new(FIGURE_TITLE, "Time/s")
        .with_panel(panel("Battery Percentage", "Percentage/%", "percentage", recording.percentage(), TAB_BLUE)?)
        .with_panel(panel("Battery Current", "Current/mA", "current", recording.current(), TAB_ORANGE)?)
        .with_panel(panel("Battery Temperature", "Temperature/°C", "temperature", recording.temperature(), TAB_RED)?);
    figure.autoscale();
    Ok(figure)
}

/// Render the chart for `recording` to `path`.
///
/// Returns `Ok(None)` without touching the filesystem when nothing was
/// recorded, otherwise the absolute path of the written image.
pub fn save_chart(recording: &Recording, path: &Path, opts: &RenderOptions) -> Result<Option<PathBuf>> {
    if recording.is_empty() {
        return Ok(None);
    }
    let figure = charging_figure(recording)?;
    figure.render_to_file(opts, path)?;
    let absolute = std::fs::canonicalize(path)?;
    debug!("wrote {} readings to {}", recording.len(), absolute.display());
    Ok(Some(absolute))
}
