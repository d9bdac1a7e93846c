// File: crates/stats-chart/src/error.rs
// Summary: Error type shared by figure construction and rendering.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encoding {0:?} image failed")]
    Encode(crate::types::ImageFormat),

    #[error("reading back surface pixels failed")]
    ReadPixels,

    #[error("unsupported image format for '{}' (expected png, jpg, jpeg or webp)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("column lengths differ: {xs} x values, {ys} y values")]
    MisalignedColumns { xs: usize, ys: usize },

    #[error("figure has no panels to render")]
    EmptyFigure,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
