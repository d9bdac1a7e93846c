// File: crates/stats-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and panel layout.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { (self.right - self.left).max(0.0) }
    pub fn height(&self) -> f32 { (self.bottom - self.top).max(0.0) }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// Shrink the top edge by `dy`, never past the bottom edge.
    pub fn inset_top(&self, dy: f32) -> Self {
        Self { top: (self.top + dy).min(self.bottom), ..*self }
    }

    /// Split into `rows` equal-height rows separated by `gap` pixels.
    pub fn split_rows(&self, rows: usize, gap: f32) -> Vec<RectF> {
        if rows == 0 {
            return Vec::new();
        }
        let gaps = gap * (rows - 1) as f32;
        let row_h = ((self.height() - gaps) / rows as f32).max(1.0);
        (0..rows)
            .map(|i| {
                let top = self.top + i as f32 * (row_h + gap);
                Self { top, bottom: top + row_h, ..*self }
            })
            .collect()
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
