// File: crates/chart-core/src/format.rs
// Summary: Raster output formats, selected from the output file extension.

use std::path::Path;

use skia_safe as skia;

use crate::error::RenderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    /// Infer the format from the extension of `path` (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| RenderError::MissingExtension(path.to_path_buf()))?;
        Self::from_extension(ext).ok_or_else(|| RenderError::UnsupportedFormat(ext.to_string()))
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub(crate) fn to_skia(self) -> skia::EncodedImageFormat {
        match self {
            Self::Png => skia::EncodedImageFormat::PNG,
            Self::Jpeg => skia::EncodedImageFormat::JPEG,
            Self::Webp => skia::EncodedImageFormat::WEBP,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Webp => "WebP",
        }
    }
}
