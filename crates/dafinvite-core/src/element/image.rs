//! Image payloads carried by image elements and image backgrounds.
//!
//! Uploaded files reach the design model as `data:` URIs. Reading the file is
//! the upload layer's job; this module only encodes, decodes and sniffs the
//! payload.

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Svg,
    WebP,
}

impl ImageFormat {
    /// Get MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "gif" => Some(ImageFormat::Gif),
            "svg" => Some(ImageFormat::Svg),
            "webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Detect format from a MIME type.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/gif" => Some(ImageFormat::Gif),
            "image/svg+xml" => Some(ImageFormat::Svg),
            "image/webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ImageFormat::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }

        // GIF87a / GIF89a
        if data.starts_with(b"GIF8") {
            return Some(ImageFormat::Gif);
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }

        // SVG is text; allow a leading XML declaration or whitespace
        let head = String::from_utf8_lossy(&data[..data.len().min(256)]);
        let head = head.trim_start();
        if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
            return Some(ImageFormat::Svg);
        }

        None
    }
}

/// Errors from decoding an image data URI.
#[derive(Debug, Error)]
pub enum ImageDataError {
    #[error("Not a data URI")]
    NotDataUri,
    #[error("Data URI has no payload")]
    MissingPayload,
    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Check whether a string is a `data:` URI (as opposed to a color).
pub fn is_data_uri(value: &str) -> bool {
    value.starts_with("data:")
}

/// Encode raw image bytes as a base64 `data:` URI.
pub fn encode_data_uri(data: &[u8], format: ImageFormat) -> String {
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(data))
}

/// Decode a `data:` URI into its MIME type and raw bytes.
///
/// Non-base64 URIs (e.g. inline SVG) return the payload bytes verbatim.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), ImageDataError> {
    let rest = uri.strip_prefix("data:").ok_or(ImageDataError::NotDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(ImageDataError::MissingPayload)?;

    let (mime, is_base64) = match header.strip_suffix(";base64") {
        Some(mime) => (mime, true),
        None => (header, false),
    };

    let bytes = if is_base64 {
        STANDARD.decode(payload)?
    } else {
        payload.as_bytes().to_vec()
    };

    Ok((mime.to_string(), bytes))
}
