//! Media types and thumbnails for served images.

use image::{ImageFormat, imageops::FilterType};
use std::io::Cursor;
use tracing::debug;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// Largest thumbnail width a client may ask for.
pub const MAX_THUMBNAIL_WIDTH: u32 = 2048;

/// Image media type for a file extension, `None` when it is not an image.
pub fn image_media_type(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Scales an image down to `width` pixels (aspect ratio kept) and encodes
/// it as PNG. Images already narrower than `width` are re-encoded as-is.
pub fn thumbnail_png(image_data: &[u8], width: u32) -> Result<Vec<u8>, image::ImageError> {
    let img = image::load_from_memory(image_data)?;

    let resized = if img.width() > width {
        debug!(
            "Resizing image from {}x{} to width {}",
            img.width(),
            img.height(),
            width
        );
        img.resize(width, u32::MAX, FilterType::Triangle)
    } else {
        img
    };

    let mut buffer = Cursor::new(Vec::new());
    resized.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// `Content-Disposition` value that forces a download under `file_name`.
///
/// Quotes and control characters are dropped from the plain `filename`;
/// names with non-ASCII characters also get an RFC 5987 `filename*`.
pub fn attachment_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .filter(|c| !c.is_ascii_control() && *c != '"' && *c != '\\')
        .collect();

    if file_name.is_ascii() {
        return format!("attachment; filename=\"{}\"", fallback);
    }

    let mut encoded = String::with_capacity(file_name.len() * 3);
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    )
}
