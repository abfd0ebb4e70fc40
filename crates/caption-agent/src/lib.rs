//! Generation backend client for the salon caption bot.
//!
//! Wraps an OpenRouter-style chat-completions endpoint: a role-tagged
//! message list with a per-tier `system` persona and a `user` prompt
//! built from the caption topic and details. A response missing the
//! generated text is a [`GenerationError::MalformedResponse`], distinct
//! from transport failure, so callers can log the difference.

pub mod client;
pub mod error;
pub mod persona;
pub mod source;

pub use client::{
    CaptionClient, ChatMessage, ChatRequest, ChatResponse, DEFAULT_MODEL, OPENROUTER_API_KEY_ENV,
    OPENROUTER_MODEL_ENV,
};
pub use error::{GenerationError, Result};
pub use source::CaptionSource;
