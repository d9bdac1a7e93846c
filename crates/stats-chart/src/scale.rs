// File: crates/stats-chart/src/scale.rs
// Summary: Linear data-to-pixel transform used for both axes.

/// Maps the data interval `[v0, v1]` onto the pixel interval `[px0, px1]`.
/// For a y axis pass the bottom pixel as `px0` so larger values go up.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px0: f32,
    pub px1: f32,
    pub v0: f64,
    pub v1: f64,
}

impl LinearScale {
    pub fn new(px0: f32, px1: f32, v0: f64, v1: f64) -> Self {
        let mut s = Self { px0, px1, v0, v1 };
        if (s.v1 - s.v0).abs() < 1e-12 { s.v1 = s.v0 + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.v0) / (self.v1 - self.v0);
        self.px0 + t as f32 * (self.px1 - self.px0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.px1 - self.px0;
        if span.abs() < f32::EPSILON {
            return self.v0;
        }
        self.v0 + ((px - self.px0) / span) as f64 * (self.v1 - self.v0)
    }
}
