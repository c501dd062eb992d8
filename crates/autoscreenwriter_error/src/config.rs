//! Setup failures: settings, HTTP client, logging, input files.

/// What went wrong while setting things up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Settings sources could not be read or deserialized.
    #[display("Failed to load settings: {_0}")]
    Load(String),
    /// A required setting is present but blank.
    #[display("{_0} must not be empty")]
    EmptyValue(&'static str),
    /// The HTTP client could not be built from the settings.
    #[display("Failed to build HTTP client: {_0}")]
    HttpClient(String),
    /// The log filter or subscriber could not be installed.
    #[display("Failed to set up logging: {_0}")]
    Logging(String),
    /// A model registry is already installed for this process.
    #[display("Model registry is already installed")]
    RegistryInstalled,
    /// A file named on the command line cannot be used.
    #[display("Unusable input file: {_0}")]
    InputFile(String),
}

/// Setup error with location tracking.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::EmptyValue("project"));
/// assert!(err.to_string().contains("project must not be empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new config error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}
