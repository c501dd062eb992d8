//! Input validation errors.

/// Validation failure conditions for story inputs and generation settings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A required text field is empty or whitespace.
    #[display("Field '{_0}' must not be empty")]
    EmptyField(&'static str),
    /// A required field was never set.
    #[display("Field '{_0}' is required")]
    MissingField(String),
    /// A premise tag was selected twice.
    #[display("Premise tag '{_0}' selected more than once")]
    DuplicatePremise(String),
    /// A premise tag would break the comma-joined premise list.
    #[display("Premise tag '{_0}' must not contain a comma")]
    PremiseContainsComma(String),
    /// A premise tag is empty.
    #[display("Premise tag must not be empty")]
    EmptyPremise,
    /// Temperature outside `[0, 1]`, rendered as text to keep `Eq`.
    #[display("Temperature {_0} is outside [0, 1]")]
    TemperatureOutOfRange(String),
    /// Token limit of zero.
    #[display("max_output_tokens must be greater than zero")]
    ZeroMaxOutputTokens,
    /// A request carried no content parts.
    #[display("Request has no content parts")]
    EmptyContent,
}

/// Validation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoscreenwriter_error::{ValidationError, ValidationErrorKind};
    ///
    /// let err = ValidationError::new(ValidationErrorKind::EmptyField("character_name"));
    /// assert!(err.to_string().contains("character_name"));
    /// ```
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

impl From<ValidationErrorKind> for ValidationError {
    #[track_caller]
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind)
    }
}
