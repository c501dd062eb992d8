//! Helpers for building media parts.

use autoscreenwriter_core::{Blob, FileData, Part};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

/// Guess an image MIME type from a file extension.
pub fn image_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

/// Inline part carrying base64-encoded bytes.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_core::Part;
/// use autoscreenwriter_models::inline_part;
///
/// let Part::InlineData(blob) = inline_part("image/png", b"abc") else {
///     panic!("expected inline data");
/// };
/// assert_eq!(blob.data(), "YWJj");
/// ```
pub fn inline_part(mime_type: &str, bytes: &[u8]) -> Part {
    Part::InlineData(Blob::new(mime_type, STANDARD.encode(bytes)))
}

/// Part referencing a stored file such as `gs://bucket/image.jpg`.
pub fn file_part(mime_type: &str, uri: &str) -> Part {
    Part::FileData(FileData::new(mime_type, uri))
}
