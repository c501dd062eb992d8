//! Content parts exchanged with the model service.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Inline binary payload, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// MIME type, e.g. "image/png"
    mime_type: String,
    /// Base64-encoded bytes
    data: String,
}

impl Blob {
    /// Wrap already-encoded data.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

/// Reference to a file stored by the service, e.g. a `gs://` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    /// MIME type of the referenced file
    mime_type: String,
    /// URI of the file
    file_uri: String,
}

impl FileData {
    /// Reference a stored file.
    pub fn new(mime_type: impl Into<String>, file_uri: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            file_uri: file_uri.into(),
        }
    }
}

/// One part of a message.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_core::Part;
///
/// let part = Part::text("Describe this image.");
/// assert_eq!(part.as_text(), Some("Describe this image."));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    /// Plain text
    Text(String),
    /// Inline media
    InlineData(Blob),
    /// Stored media
    FileData(FileData),
    /// Function call emitted by the model; carried opaquely
    FunctionCall(serde_json::Value),
}

impl Part {
    /// Text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(text.into())
    }

    /// Text payload, if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A message: a role plus ordered parts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Message parts
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// User message with the given parts.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    /// Model message with the given parts.
    pub fn model(parts: Vec<Part>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts,
        }
    }
}
