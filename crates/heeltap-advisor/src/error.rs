//! Error types for heeltap-advisor

use thiserror::Error;

/// Errors that can occur while asking the text-generation service for advice
#[derive(Error, Debug)]
pub enum AdviceError {
    /// No API key in the environment
    #[error("advice service API key is not configured")]
    NotConfigured,

    /// HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a non-success status
    #[error("advice service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("malformed advice response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for AdviceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AdviceError::MalformedResponse(err.to_string())
        } else {
            AdviceError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AdviceError {
    fn from(err: serde_json::Error) -> Self {
        AdviceError::MalformedResponse(err.to_string())
    }
}

/// Result type for advice operations
pub type AdviceResult<T> = std::result::Result<T, AdviceError>;

/// Misuse of the advice request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("advice has already been requested for this session")]
    AlreadyAsked,

    #[error("no advice request is pending")]
    NotPending,
}
