// File: crates/stats-chart/src/types.rs
// Summary: Shared types and constants (sizes, paddings, output formats).

use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 768;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for y tick labels plus the rotated y label on the left
        Self::new(96, 32, 16, 56)
    }
}

/// Encoded output formats supported by the raster pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            _ => Err(ChartError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub(crate) fn encoded(self) -> skia::EncodedImageFormat {
        match self {
            Self::Png => skia::EncodedImageFormat::PNG,
            Self::Jpeg => skia::EncodedImageFormat::JPEG,
            Self::Webp => skia::EncodedImageFormat::WEBP,
        }
    }
}
