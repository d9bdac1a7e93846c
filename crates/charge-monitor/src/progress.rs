// File: crates/charge-monitor/src/progress.rs
// Summary: Progress reporting for the sampling loop; a terminal bar or nothing.

use std::time::Duration;

use console::Term;
use log::debug;

pub trait ProgressSink {
    /// Report overall progress (0..=100). May move backwards.
    fn update(&mut self, percent: u8, elapsed: Duration);
    fn finish(&mut self, elapsed: Duration);
}

/// Discards all updates.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn update(&mut self, _percent: u8, _elapsed: Duration) {}
    fn finish(&mut self, _elapsed: Duration) {}
}

const BAR_WIDTH: usize = 40;

/// In-place `%` bar on stderr. Draws nothing when stderr is not a terminal.
pub struct ProgressBar {
    term: Term,
    position: u8,
    drawn: bool,
}

impl ProgressBar {
    pub fn stderr() -> Self {
        Self { term: Term::stderr(), position: 0, drawn: false }
    }

    pub fn position(&self) -> u8 { self.position }

    fn draw(&mut self, elapsed: Duration) {
        if !self.term.is_term() {
            return;
        }
        let line = render_line(self.position, elapsed, BAR_WIDTH);
        if let Err(e) = self.term.clear_line().and_then(|_| self.term.write_str(&line)) {
            debug!("progress bar redraw failed: {e}");
        }
        self.drawn = true;
    }
}

impl ProgressSink for ProgressBar {
    fn update(&mut self, percent: u8, elapsed: Duration) {
        self.position = percent.min(100);
        self.draw(elapsed);
    }

    fn finish(&mut self, elapsed: Duration) {
        self.draw(elapsed);
        if self.drawn {
            if let Err(e) = self.term.write_line("") {
                debug!("progress bar finish failed: {e}");
            }
        }
    }
}

/// `" 45%|##########..........| 45/100 [01:02]"`
pub fn render_line(position: u8, elapsed: Duration, width: usize) -> String {
    let position = position.min(100);
    let filled = usize::from(position) * width / 100;
    format!(
        "{:>3}%|{}{}| {}/100 [{}]",
        position,
        "#".repeat(filled),
        ".".repeat(width - filled),
        position,
        format_elapsed(elapsed)
    )
}

/// `mm:ss`, or `h:mm:ss` from one hour on.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}
