//! Errors raised by the response stream itself.
//!
//! A [`StreamError`] means the transport or the event framing broke. It is
//! never recovered locally: aggregation stops and the error reaches the caller.

/// Stream failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StreamErrorKind {
    /// Server answered with a non-success status before streaming began
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body, if any
        message: String,
    },
    /// Connection dropped or the body could not be read
    Transport(String),
    /// A server-sent event did not contain a valid response payload
    MalformedEvent(String),
    /// Server reported an error object inside the stream
    Server(String),
}

impl std::fmt::Display for StreamErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamErrorKind::HttpStatus {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            StreamErrorKind::Transport(msg) => write!(f, "Stream transport failed: {}", msg),
            StreamErrorKind::MalformedEvent(msg) => {
                write!(f, "Malformed stream event: {}", msg)
            }
            StreamErrorKind::Server(msg) => write!(f, "Server reported error: {}", msg),
        }
    }
}

/// Stream error with source location tracking.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_error::{StreamError, StreamErrorKind};
///
/// let err = StreamError::new(StreamErrorKind::Transport("reset by peer".into()));
/// assert!(format!("{}", err).contains("reset by peer"));
/// ```
#[derive(Debug, Clone)]
pub struct StreamError {
    /// The kind of error that occurred
    pub kind: StreamErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StreamError {
    /// Create a new StreamError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StreamErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stream Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for StreamError {}
