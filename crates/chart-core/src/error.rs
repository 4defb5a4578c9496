// File: crates/chart-core/src/error.rs
// Summary: Rendering error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("output path {0} has no file extension; cannot pick an image format")]
    MissingExtension(PathBuf),
    #[error("unsupported image format `{0}` (expected png, jpg, jpeg or webp)")]
    UnsupportedFormat(String),
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to encode image as {0}")]
    Encode(&'static str),
    #[error("failed to read back rendered pixels")]
    ReadPixels,
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
