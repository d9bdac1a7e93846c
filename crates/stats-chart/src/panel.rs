// File: crates/stats-chart/src/panel.rs
// Summary: One plot area of a figure: title, own y axis, and its series.

use crate::axis::Axis;
use crate::series::Series;

#[derive(Clone, Debug)]
pub struct Panel {
    pub title: String,
    pub y_axis: Axis,
    pub series: Vec<Series>,
}

impl Panel {
    pub fn new(title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self { title: title.into(), y_axis: Axis::labeled(y_label), series: Vec::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.add_series(series);
        self
    }

    /// Combined finite x bounds of all series.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        merge(self.series.iter().filter_map(Series::x_range))
    }

    /// Combined finite y bounds of all series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        merge(self.series.iter().filter_map(Series::y_range))
    }

    /// Fit the y axis to the data with `margin` (fraction of the span) on both
    /// ends. Returns false and leaves the axis untouched when there is no data.
    pub fn autoscale_y(&mut self, margin: f64) -> bool {
        match self.y_range() {
            Some((lo, hi)) => {
                self.y_axis.fit(lo, hi, margin);
                true
            }
            None => false,
        }
    }
}

pub(crate) fn merge(ranges: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64)> {
    ranges.fold(None, |acc, (lo, hi)| match acc {
        None => Some((lo, hi)),
        Some((a, b)) => Some((a.min(lo), b.max(hi))),
    })
}
