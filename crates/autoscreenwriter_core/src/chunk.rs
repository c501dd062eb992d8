//! Streamed response chunks and text extraction.

use crate::{Content, Part};
use autoscreenwriter_error::{ExtractionError, ExtractionErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Safety rating attached to a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRating {
    /// Harm category, as reported by the service
    category: String,
    /// Probability bucket, as reported by the service
    #[serde(default)]
    probability: Option<String>,
    /// Whether this rating caused the block
    #[serde(default)]
    blocked: bool,
}

/// One candidate completion within a chunk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content; absent when the candidate was blocked
    #[serde(default)]
    content: Option<Content>,
    /// Why generation stopped, e.g. "STOP" or "SAFETY"
    #[serde(default)]
    finish_reason: Option<String>,
    /// Safety ratings for this candidate
    #[serde(default)]
    safety_ratings: Vec<SafetyRating>,
}

/// Token accounting reported with the final chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    prompt_token_count: u32,
    /// Tokens across candidates
    #[serde(default)]
    candidates_token_count: u32,
    /// Total tokens
    #[serde(default)]
    total_token_count: u32,
}

/// One unit of a streamed model response.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_core::ResponseChunk;
///
/// assert_eq!(ResponseChunk::from_text("Hello").text().unwrap(), "Hello");
/// assert!(ResponseChunk::blocked("SAFETY").text().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ResponseChunk {
    /// Candidate completions
    #[serde(default)]
    candidates: Vec<Candidate>,
    /// Token usage, usually only on the last chunk
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

impl ResponseChunk {
    /// Chunk carrying a single text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content::model(vec![Part::text(text)])),
                finish_reason: None,
                safety_ratings: Vec::new(),
            }],
            usage_metadata: None,
        }
    }

    /// Chunk whose only candidate was stopped without content.
    pub fn blocked(finish_reason: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some(finish_reason.into()),
                safety_ratings: Vec::new(),
            }],
            usage_metadata: None,
        }
    }

    /// Text of the first candidate.
    ///
    /// Multiple text parts are concatenated in order. Non-text parts are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Fails when there is no candidate, the candidate has no parts, or
    /// none of its parts is text.
    pub fn text(&self) -> Result<String, ExtractionError> {
        let candidate = self
            .candidates
            .first()
            .ok_or(ExtractionErrorKind::NoCandidates)?;

        let parts = candidate
            .content
            .as_ref()
            .map(|content| content.parts().as_slice())
            .filter(|parts| !parts.is_empty())
            .ok_or_else(|| ExtractionErrorKind::NoContent {
                finish_reason: candidate.finish_reason.clone(),
            })?;

        let texts: Vec<&str> = parts.iter().filter_map(Part::as_text).collect();
        if texts.is_empty() {
            return Err(ExtractionErrorKind::NoText.into());
        }
        Ok(texts.concat())
    }
}
