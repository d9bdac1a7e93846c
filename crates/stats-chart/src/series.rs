// File: crates/stats-chart/src/series.rs
// Summary: Line series model built from aligned x/y columns.

use skia_safe as skia;

use crate::downsample::lttb;
use crate::error::{ChartError, Result};

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    /// Stroke colour; `None` uses the theme's default line colour.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, color: None }
    }

    /// Zip two equally long columns into a series.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(ChartError::MisalignedColumns { xs: xs.len(), ys: ys.len() });
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self::with_data(label, data))
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Finite x bounds, or `None` when there is no finite point.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        finite_bounds(self.data_xy.iter().map(|p| p.0))
    }

    /// Finite y bounds, or `None` when there is no finite point.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        finite_bounds(self.data_xy.iter().map(|p| p.1))
    }

    /// Downsample using LTTB to at most `max_points` (no-op below that).
    pub fn downsample_lttb(&self, max_points: usize) -> Self {
        let data = if self.data_xy.len() > max_points && max_points >= 2 {
            lttb(&self.data_xy, max_points)
        } else {
            self.data_xy.clone()
        };
        Self { label: self.label.clone(), data_xy: data, color: self.color }
    }
}

pub(crate) fn finite_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
