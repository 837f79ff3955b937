use thiserror::Error;

/// Result type for subrobot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for subrobot
///
/// Errors are carried as values on [`Request`](crate::Request) and
/// [`Response`](crate::Response); nothing here is retried or logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request body could not be encoded as JSON
    #[error("JSON encode error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Response body could not be decoded as JSON
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request deadline passed before the exchange finished
    #[error("Request timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Any status other than 200
    #[error("Response {}, body={body}", .status.as_u16())]
    Status {
        status: http::StatusCode,
        body: String,
    },

    /// Writing the response body to a sink failed
    #[error("IO error after {written} bytes: {source}")]
    Io {
        written: u64,
        #[source]
        source: std::io::Error,
    },

    /// Proxy errors
    #[error("Proxy error: {0}")]
    Proxy(String),

    /// Invalid request configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new timeout error
    pub fn timeout(duration: std::time::Duration) -> Self {
        Error::Timeout { duration }
    }

    /// Create a new status error
    pub fn status(status: http::StatusCode, body: impl Into<String>) -> Self {
        Error::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a new proxy error
    pub fn proxy(message: impl Into<String>) -> Self {
        Error::Proxy(message.into())
    }

    /// Create a new invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Error::InvalidRequest(message.into())
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Check if this is a non-200 status error
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status { .. })
    }

    /// Get the HTTP status code if this is a status error
    pub fn status_code(&self) -> Option<http::StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the underlying reqwest error if this is a network error
    pub fn as_network_error(&self) -> Option<&reqwest::Error> {
        match self {
            Error::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Error::InvalidRequest(format!("Invalid header name: {}", err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Error::InvalidRequest(format!("Invalid header value: {}", err))
    }
}
