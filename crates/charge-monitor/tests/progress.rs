// File: crates/charge-monitor/tests/progress.rs
// Purpose: Progress bar line layout and the stderr sink.

use std::time::Duration;

use charge_monitor::progress::{format_elapsed, render_line, ProgressBar, ProgressSink};

#[test]
fn bar_fills_proportionally() {
    assert_eq!(render_line(0, Duration::ZERO, 10), "  0%|..........| 0/100 [00:00]");
    assert_eq!(render_line(45, Duration::from_secs(62), 10), " 45%|####......| 45/100 [01:02]");
    assert_eq!(render_line(100, Duration::from_secs(5), 10), "100%|##########| 100/100 [00:05]");
}

#[test]
fn bar_clamps_overflow() {
    assert_eq!(render_line(250, Duration::ZERO, 4), "100%|####| 100/100 [00:00]");
}

#[test]
fn elapsed_switches_to_hours() {
    assert_eq!(format_elapsed(Duration::from_secs(59)), "00:59");
    assert_eq!(format_elapsed(Duration::from_secs(3_725)), "1:02:05");
}

#[test]
fn stderr_bar_clamps_and_follows_backwards_moves() {
    let mut bar = ProgressBar::stderr();
    assert_eq!(bar.position(), 0);

    bar.update(250, Duration::from_secs(1));
    assert_eq!(bar.position(), 100);

    bar.update(40, Duration::from_secs(2));
    assert_eq!(bar.position(), 40);

    // stderr may or may not be a terminal here; either way finish is quiet about errors
    bar.finish(Duration::from_secs(3));
    assert_eq!(bar.position(), 40);
}
