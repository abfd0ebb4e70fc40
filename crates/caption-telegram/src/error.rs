//! Error types for the Telegram transport.

use thiserror::Error;

/// Errors that can occur talking to the Telegram Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Network-level failure: connect error, socket timeout, etc.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with a non-2xx status or `"ok": false`.
    #[error("Telegram API error {status}: {description}")]
    Api {
        /// HTTP status code, or 200 when the envelope carried `ok: false`.
        status: u16,
        /// The API's error description, or the raw body.
        description: String,
    },

    /// The response body did not match the expected envelope.
    #[error("malformed Telegram response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for TelegramError {
    fn from(e: reqwest::Error) -> Self {
        TelegramError::Http(e.to_string())
    }
}

/// Result type for Telegram operations.
pub type Result<T> = std::result::Result<T, TelegramError>;
