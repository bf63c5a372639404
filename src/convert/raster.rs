//! Raster images carried as Base64 strings
//!
//! GUI front-ends display captured images through data URIs, so raster
//! buffers travel as Base64 text (RFC 4648 standard padded alphabet).

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat};

use crate::error::{ToolboxError, ToolboxResult};

/// Decode a Base64 string into an in-memory raster.
///
/// The image format is auto-detected from the decoded bytes. Malformed
/// Base64 and unrecognized or corrupt image data are reported as errors,
/// never as an empty image.
pub fn image_from_base64(encoded: &str) -> ToolboxResult<DynamicImage> {
    let bytes = STANDARD.decode(encoded)?;
    let image =
        image::load_from_memory(&bytes).map_err(|source| ToolboxError::ImageDecode { source })?;
    log::debug!(
        "decoded {} Base64 payload bytes into a {}x{} raster",
        bytes.len(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Encode a raster in the named format and return the bytes as Base64.
///
/// `format` is a plain extension-style name ("png", "jpeg", "gif", ...),
/// matched case-insensitively.
pub fn image_to_base64(image: &DynamicImage, format: &str) -> ToolboxResult<String> {
    let target = resolve_format(format)?;
    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    image
        .write_to(&mut cursor, target)
        .map_err(|source| ToolboxError::ImageEncode {
            format: format.to_string(),
            source,
        })?;
    log::debug!(
        "encoded a {}x{} raster as {format} ({} bytes)",
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(STANDARD.encode(&bytes))
}

fn resolve_format(format: &str) -> ToolboxResult<ImageFormat> {
    ImageFormat::from_extension(format)
        .filter(ImageFormat::can_write)
        .ok_or_else(|| ToolboxError::UnsupportedFormat {
            format: format.to_string(),
        })
}
