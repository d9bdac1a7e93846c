// File: crates/stats-chart/src/lib.rs
// Summary: Library entry point; exports the figure/panel API and headless rendering.

pub mod axis;
pub mod downsample;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod panel;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use downsample::lttb;
pub use error::ChartError;
pub use figure::{Figure, RenderOptions};
pub use panel::Panel;
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{ImageFormat, Insets};
pub use skia_safe::Color;
