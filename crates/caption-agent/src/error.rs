//! Error types for caption generation.

use thiserror::Error;

/// Errors that can occur calling the generation backend.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Missing or invalid configuration (API key, model).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network-level failure: connect error, request timeout.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-2xx status.
    #[error("generation API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A 2xx response missing the generated text. Kept distinct from
    /// transport failure so the dispatcher can log which side broke.
    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        GenerationError::Http(e.to_string())
    }
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
