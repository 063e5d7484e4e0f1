use std::fmt;

/// Custom error type for Lark operations
#[derive(Debug)]
pub enum LarkError {
    /// Request body could not be serialized to JSON
    Serialization(String),
    /// Request could not be built (invalid method or URL)
    Request(String),
    /// Unknown access token kind
    InvalidTokenKind(String),
    /// Transport-level failure (DNS, connect, reset, timeout, ...)
    Transport(String),
    /// API returned an error envelope
    Api { code: i64, message: String },
    /// API returned an error status with an undecodable body
    ErrorStatus(u16),
    /// Success body could not be decoded into the expected shape
    Decode(String),
    /// Every attempt failed with a transient error
    RetriesExhausted { retries: u32, last: Box<LarkError> },
    /// The client's cancellation token fired
    Cancelled,
    /// A chunked operation failed after earlier chunks were applied
    PartialBatch {
        applied: Vec<String>,
        source: Box<LarkError>,
    },
    /// Input rejected before any request was issued
    Validation(String),
    /// Resource not found
    NotFound(String),
    /// Failed to resolve or parse credentials
    Credentials(String),
    /// Configuration error
    Config(String),
}

impl LarkError {
    /// Whether this error is a transport failure worth retrying
    pub fn is_transient(&self) -> bool {
        match self {
            LarkError::Transport(msg) => {
                let msg = msg.to_lowercase();
                crate::config::retry::TRANSIENT_PHRASES
                    .iter()
                    .any(|phrase| msg.contains(phrase))
            }
            _ => false,
        }
    }
}

impl fmt::Display for LarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LarkError::Serialization(msg) => write!(f, "error marshaling request: {}", msg),
            LarkError::Request(msg) => write!(f, "error creating request: {}", msg),
            LarkError::InvalidTokenKind(kind) => {
                write!(f, "invalid authorization header: {}", kind)
            }
            LarkError::Transport(msg) => write!(f, "error executing request: {}", msg),
            LarkError::Api { code, message } => {
                write!(f, "API error: code={}, message={}", code, message)
            }
            LarkError::ErrorStatus(status) => {
                write!(f, "error response with status code {}", status)
            }
            LarkError::Decode(msg) => write!(f, "error decoding response: {}", msg),
            LarkError::RetriesExhausted { retries, last } => {
                write!(f, "failed after {} retries. Last error: {}", retries, last)
            }
            LarkError::Cancelled => write!(f, "request cancelled"),
            LarkError::PartialBatch { applied, source } => write!(
                f,
                "batch aborted after applying {} ID(s): {}",
                applied.len(),
                source
            ),
            LarkError::Validation(msg) => write!(f, "{}", msg),
            LarkError::NotFound(msg) => write!(f, "{}", msg),
            LarkError::Credentials(msg) => write!(f, "{}", msg),
            LarkError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for LarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LarkError::RetriesExhausted { last, .. } => Some(last.as_ref()),
            LarkError::PartialBatch { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LarkError {
    fn from(err: serde_json::Error) -> Self {
        LarkError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for LarkError {
    fn from(err: std::io::Error) -> Self {
        LarkError::Credentials(err.to_string())
    }
}

/// Result type alias for Lark operations
pub type Result<T> = std::result::Result<T, LarkError>;
