// File: crates/stats-chart/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `raw` up to a 1, 2, 2.5 or 5 multiple of a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick values at a nice step that fall inside `[min, max]`.
/// Returns at most `max_ticks + 1` values.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || max_ticks == 0 {
        return Vec::new();
    }
    let step = nice_step((max - min) / max_ticks as f64);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        .collect()
}

/// Format a tick value with just enough decimals for the given step.
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    if step.is_finite() && step > 0.0 {
        while decimals < 6 {
            let scaled = step * 10f64.powi(decimals as i32);
            if (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0) {
                break;
            }
            decimals += 1;
        }
    }
    let v = if value.abs() < 1e-12 { 0.0 } else { value };
    format!("{:.*}", decimals, v)
}
