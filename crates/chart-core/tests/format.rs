// File: crates/chart-core/tests/format.rs
// Purpose: Output format inference from file extensions.

use std::path::Path;

use chart_core::{ImageFormat, RenderError};

#[test]
fn known_extensions() {
    assert_eq!(ImageFormat::from_path(Path::new("out.png")).unwrap(), ImageFormat::Png);
    assert_eq!(ImageFormat::from_path(Path::new("dir/out.PNG")).unwrap(), ImageFormat::Png);
    assert_eq!(ImageFormat::from_path(Path::new("out.jpg")).unwrap(), ImageFormat::Jpeg);
    assert_eq!(ImageFormat::from_path(Path::new("out.jpeg")).unwrap(), ImageFormat::Jpeg);
    assert_eq!(ImageFormat::from_path(Path::new("out.webp")).unwrap(), ImageFormat::Webp);
}

#[test]
fn unknown_or_missing_extension() {
    assert!(matches!(
        ImageFormat::from_path(Path::new("out.gif")),
        Err(RenderError::UnsupportedFormat(ref e)) if e == "gif"
    ));
    assert!(matches!(
        ImageFormat::from_path(Path::new("chart")),
        Err(RenderError::MissingExtension(_))
    ));
}
