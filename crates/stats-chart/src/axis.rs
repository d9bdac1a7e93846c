// File: crates/stats-chart/src/axis.rs
// Summary: Axis model with label and visible range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis with a label and the placeholder range 0..1, to be autoscaled later.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Set the range from data bounds, padding both ends by `margin` of the span.
    /// A flat range is widened to one unit around its value.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        let (mut lo, mut hi) = (lo, hi);
        if (hi - lo).abs() < 1e-9 {
            lo -= 0.5;
            hi += 0.5;
        }
        let m = (hi - lo) * margin;
        self.min = lo - m;
        self.max = hi + m;
    }
}
