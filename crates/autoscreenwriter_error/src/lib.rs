//! Error types for the Autoscreenwriter story generator.
//!
//! Each failure domain has its own location-tracking error type. They roll up
//! into [`AutoscreenwriterError`] for callers that do not care which layer failed.

mod config;
mod extraction;
mod stream;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use stream::{StreamError, StreamErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

/// Specific error conditions for Autoscreenwriter operations.
#[derive(Debug, derive_more::From)]
pub enum AutoscreenwriterErrorKind {
    /// Settings, client or logging setup failed
    Config(ConfigError),
    /// Story inputs or generation settings were rejected
    Validation(ValidationError),
    /// The response stream broke
    Stream(StreamError),
}

impl std::fmt::Display for AutoscreenwriterErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutoscreenwriterErrorKind::Config(e) => write!(f, "{}", e),
            AutoscreenwriterErrorKind::Validation(e) => write!(f, "{}", e),
            AutoscreenwriterErrorKind::Stream(e) => write!(f, "{}", e),
        }
    }
}

/// Autoscreenwriter error with kind discrimination.
#[derive(Debug)]
pub struct AutoscreenwriterError(Box<AutoscreenwriterErrorKind>);

impl AutoscreenwriterError {
    /// Create a new error from a kind.
    pub fn new(kind: AutoscreenwriterErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AutoscreenwriterErrorKind {
        &self.0
    }
}

impl std::fmt::Display for AutoscreenwriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Autoscreenwriter Error: {}", self.0)
    }
}

impl std::error::Error for AutoscreenwriterError {}

impl<T> From<T> for AutoscreenwriterError
where
    T: Into<AutoscreenwriterErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Autoscreenwriter operations.
pub type AutoscreenwriterResult<T> = std::result::Result<T, AutoscreenwriterError>;
