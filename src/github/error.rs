//! GitHub API error types

use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Underlying HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload did not match the declared resource schema
    #[error("schema violation decoding {context}: {source}")]
    Deserialize {
        /// What was being decoded when the payload was rejected
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic GitHub API error
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Message body or status text
        message: String,
    },

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication required or failed
    #[error("Authentication required")]
    AuthRequired,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Positional access past the end of a paginated collection
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Total items available after exhausting all pages
        len: usize,
    },

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// Build a schema-violation error with decode context.
    pub(crate) fn deserialize(context: impl Into<String>, source: serde_json::Error) -> Self {
        GitHubError::Deserialize {
            context: context.into(),
            source,
        }
    }
}
