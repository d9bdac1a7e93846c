// File: crates/stats-chart/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for long XY recordings.

/// Largest-Triangle-Three-Buckets downsampling for XY series.
/// Returns up to `threshold` points preserving overall shape; the first and
/// last points are always kept.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    // Interior points are split into `threshold - 2` buckets.
    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let bucket_bounds = |i: usize| -> (usize, usize) {
        let start = (1.0 + i as f64 * bucket_size).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * bucket_size).floor() as usize).min(n - 1);
        (start, end.max(start + 1))
    };

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);
    let mut anchor = points[0];

    for i in 0..(threshold - 2) {
        let (start, end) = bucket_bounds(i);

        // The next bucket's centroid; the last bucket looks at the final point.
        let next = if i + 1 < threshold - 2 {
            let (ns, ne) = bucket_bounds(i + 1);
            centroid(&points[ns..ne])
        } else {
            points[n - 1]
        };

        let mut best = start;
        let mut best_area = -1.0f64;
        for (k, p) in points[start..end].iter().enumerate() {
            let area = triangle_area2(anchor, *p, next);
            if area > best_area {
                best_area = area;
                best = start + k;
            }
        }
        sampled.push(points[best]);
        anchor = points[best];
    }

    sampled.push(points[n - 1]);
    sampled
}

fn centroid(points: &[(f64, f64)]) -> (f64, f64) {
    let count = points.len().max(1) as f64;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
    (sx / count, sy / count)
}

/// Twice the triangle area (the factor does not matter for comparisons).
#[inline]
fn triangle_area2(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    ((a.0 - c.0) * (b.1 - a.1) - (a.0 - b.0) * (c.1 - a.1)).abs()
}
