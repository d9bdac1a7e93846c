// File: crates/stats-chart/tests/downsample.rs
// Purpose: LTTB keeps endpoints, respects the threshold and preserves spikes.

use stats_chart::{lttb, Series};

#[test]
fn lttb_respects_threshold_and_endpoints() {
    let data: Vec<(f64, f64)> = (0..1000).map(|i| (i as f64, (i as f64 * 0.05).sin())).collect();
    let out = lttb(&data, 100);
    assert_eq!(out.len(), 100);
    assert_eq!(out.first(), data.first());
    assert_eq!(out.last(), data.last());
    assert!(out.windows(2).all(|w| w[0].0 < w[1].0), "x stays ordered");
}

#[test]
fn lttb_keeps_a_spike() {
    let mut data: Vec<(f64, f64)> = (0..500).map(|i| (i as f64, 0.0)).collect();
    data[250].1 = 100.0;
    let out = lttb(&data, 20);
    assert!(out.iter().any(|&(_, y)| y == 100.0));
}

#[test]
fn lttb_small_inputs_pass_through() {
    let data = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)];
    assert_eq!(lttb(&data, 10), data);
    assert!(lttb(&data, 0).is_empty());
    assert_eq!(lttb(&data, 2), vec![(0.0, 1.0), (2.0, 3.0)]);
}

#[test]
fn series_downsample_is_noop_below_budget() {
    let s = Series::with_data("s", vec![(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(s.downsample_lttb(100).data_xy, s.data_xy);
}
