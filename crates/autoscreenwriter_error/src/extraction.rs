//! Per-chunk text extraction failures.

/// Reasons a response chunk yields no text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// The chunk carried no candidates at all.
    #[display("Response chunk has no candidates")]
    NoCandidates,
    /// The first candidate has no content parts, usually a safety block.
    #[display("Candidate has no content (finish reason: {})", finish_reason.as_deref().unwrap_or("unknown"))]
    NoContent {
        /// Finish reason reported by the service
        finish_reason: Option<String>,
    },
    /// Content parts exist but none of them is text.
    #[display("Candidate content has no text parts")]
    NoText,
}

/// Extraction error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    kind: ExtractionErrorKind,
    line: u32,
    file: &'static str,
}

impl ExtractionError {
    /// Create a new extraction error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ExtractionErrorKind {
        &self.kind
    }
}

impl From<ExtractionErrorKind> for ExtractionError {
    #[track_caller]
    fn from(kind: ExtractionErrorKind) -> Self {
        Self::new(kind)
    }
}
