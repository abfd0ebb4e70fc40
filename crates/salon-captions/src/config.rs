//! Startup configuration.
//!
//! Two secrets are required and read once at startup; either one
//! missing is fatal before the polling loop starts.

use std::time::Duration;

use thiserror::Error;

use caption_agent::{DEFAULT_MODEL, OPENROUTER_API_KEY_ENV, OPENROUTER_MODEL_ENV};

/// Environment variable for the Telegram bot token.
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Errors that make startup impossible.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bot token not provided.
    #[error("Telegram bot token not set. Set the {TELEGRAM_TOKEN_ENV} environment variable.")]
    MissingTelegramToken,

    /// Generation API key not provided.
    #[error("Generation API key not set. Set the {OPENROUTER_API_KEY_ENV} environment variable.")]
    MissingGenerationKey,
}

/// Resolved startup configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token.
    pub telegram_token: String,
    /// Generation backend API key.
    pub generation_api_key: String,
    /// Generation model identifier.
    pub model: String,
    /// Server-side long-poll window for `getUpdates`.
    pub poll_timeout: Duration,
}

impl BotConfig {
    /// Read configuration from the environment.
    pub fn from_env(poll_timeout: Duration) -> Result<Self, ConfigError> {
        let telegram_token = env_non_empty(TELEGRAM_TOKEN_ENV)
            .ok_or(ConfigError::MissingTelegramToken)?;
        let generation_api_key = env_non_empty(OPENROUTER_API_KEY_ENV)
            .ok_or(ConfigError::MissingGenerationKey)?;
        let model =
            env_non_empty(OPENROUTER_MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            telegram_token,
            generation_api_key,
            model,
            poll_timeout,
        })
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
