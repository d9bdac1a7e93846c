// File: crates/stats-chart/benches/render_bench.rs
// Summary: End-to-end render cost of a three-panel figure.

use anyhow::Result;
use stats_chart::{Figure, Panel, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_figure(n: usize) -> Figure {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let wave = |k: f64| xs.iter().map(|&x| (x * k).sin() * 10.0 + x * 0.0001).collect::<Vec<_>>();
    let mut fig = Figure::new("Bench", "X");
    for (i, k) in [0.01, 0.02, 0.005].into_iter().enumerate() {
        let series = Series::from_columns(format!("s{i}"), &xs, &wave(k)).expect("aligned columns");
        fig.add_panel(Panel::new(format!("Panel {i}"), "Y").with_series(series));
    }
    fig.autoscale();
    fig
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("panels3_{n}"), |b| {
            let fig = build_figure(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 600;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
