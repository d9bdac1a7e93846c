// File: crates/stats-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic three-panel figure to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use stats_chart::theme::{TAB_BLUE, TAB_ORANGE, TAB_RED};
use stats_chart::{Figure, Panel, RenderOptions, Series};

fn render_bytes() -> Vec<u8> {
    let t: Vec<f64> = (0..60).map(|i| i as f64 * 10.0).collect();
    let pct: Vec<f64> = t.iter().map(|x| 40.0 + x / 20.0).collect();
    let cur: Vec<f64> = t.iter().map(|x| 1500.0 - x).collect();
    let temp: Vec<f64> = t.iter().map(|x| 30.0 + (x / 100.0).sin()).collect();

    let mut fig = Figure::new("Snapshot", "Time/s")
        .with_panel(Panel::new("P", "%").with_series(Series::from_columns("p", &t, &pct).unwrap().with_color(TAB_BLUE)))
        .with_panel(Panel::new("C", "mA").with_series(Series::from_columns("c", &t, &cur).unwrap().with_color(TAB_ORANGE)))
        .with_panel(Panel::new("T", "C").with_series(Series::from_columns("t", &t, &temp).unwrap().with_color(TAB_RED)));
    fig.autoscale();

    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 360;
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    fig.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_three_panel_figure() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("three_panel.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.dimensions(), (480, 360));
    assert_eq!(a.as_raw(), b.as_raw());
}
