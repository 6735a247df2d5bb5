use std::path::Path;

use crate::error::{RespackError, RespackResult};

pub const BAML: &str = "application/baml+xml";
pub const XAML: &str = "application/xaml+xml";
pub const BMP: &str = "image/bmp";
pub const TIFF: &str = "image/tiff";
pub const JPEG: &str = "image/jpeg";
pub const PNG: &str = "image/png";
pub const ICON: &str = "image/x-icon";
pub const GIF: &str = "image/gif";
pub const SVG: &str = "image/svg+xml";

/// Compiled or source markup, decoded into an object graph by a [`crate::markup::MarkupDecoder`].
pub fn is_markup(mime_type: &str) -> bool {
    matches!(mime_type, BAML | XAML)
}

/// Raster formats the dispatcher handles natively with an image node.
///
/// GIF and SVG are deliberately absent: they go through the plugin registry.
pub fn is_raster(mime_type: &str) -> bool {
    matches!(mime_type, BMP | TIFF | JPEG | PNG | ICON)
}

/// Infer a MIME type from a file extension (local-file fallback only).
///
/// The table is closed; an unrecognized extension is a hard error rather than
/// an "other" bucket, because the fallback path has no declared content type
/// to fall back on.
pub fn from_extension(path: &Path) -> RespackResult<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "xaml" => Ok(XAML),
        "bmp" => Ok(BMP),
        "tif" | "tiff" => Ok(TIFF),
        "jpg" | "jpeg" => Ok(JPEG),
        "png" => Ok(PNG),
        "ico" => Ok(ICON),
        "gif" => Ok(GIF),
        "svg" => Ok(SVG),
        other => Err(RespackError::unsupported(format!(
            "extension not supported: '.{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_table_is_case_insensitive() {
        assert_eq!(from_extension(Path::new("a/B.PNG")).unwrap(), PNG);
        assert_eq!(from_extension(Path::new("x.Ico")).unwrap(), ICON);
        assert_eq!(from_extension(Path::new("x.tif")).unwrap(), TIFF);
        assert_eq!(from_extension(Path::new("x.jpeg")).unwrap(), JPEG);
    }

    #[test]
    fn unknown_extension_is_a_hard_error() {
        let err = from_extension(Path::new("x.webp")).unwrap_err();
        assert!(matches!(err, RespackError::Unsupported(_)));
        let err = from_extension(Path::new("no_extension")).unwrap_err();
        assert!(matches!(err, RespackError::Unsupported(_)));
    }

    #[test]
    fn markup_and_raster_buckets_are_disjoint() {
        for mime_type in [BAML, XAML] {
            assert!(is_markup(mime_type));
            assert!(!is_raster(mime_type));
        }
        for mime_type in [BMP, TIFF, JPEG, PNG, ICON] {
            assert!(is_raster(mime_type));
            assert!(!is_markup(mime_type));
        }
        assert!(!is_raster(GIF));
        assert!(!is_raster(SVG));
    }
}
