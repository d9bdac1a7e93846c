// File: crates/stats-chart/tests/ticks.rs
// Purpose: Tick placement and label formatting.

use stats_chart::grid::{format_tick, linspace, nice_step, nice_ticks};

#[test]
fn nice_steps_round_up() {
    assert!((nice_step(0.7) - 1.0).abs() < 1e-12);
    assert_eq!(nice_step(17.0), 20.0);
    assert_eq!(nice_step(2.2), 2.5);
    assert_eq!(nice_step(3.0), 5.0);
    assert_eq!(nice_step(0.0), 1.0);
}

#[test]
fn ticks_cover_percentage_range() {
    let ticks = nice_ticks(0.0, 100.0, 5);
    assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn ticks_stay_inside_range() {
    let ticks = nice_ticks(29.7, 34.2, 4);
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|&t| (29.7..=34.2).contains(&t)));
    assert!(nice_ticks(1.0, 1.0, 4).is_empty());
    assert!(nice_ticks(f64::NAN, 1.0, 4).is_empty());
}

#[test]
fn labels_use_step_precision() {
    assert_eq!(format_tick(40.0, 20.0), "40");
    assert_eq!(format_tick(2.5, 2.5), "2.5");
    assert_eq!(format_tick(0.75, 0.25), "0.75");
    assert_eq!(format_tick(-1e-15, 0.5), "0.0");
}

#[test]
fn linspace_includes_endpoints() {
    assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    assert_eq!(linspace(2.0, 4.0, 1), vec![2.0, 4.0]);
}
