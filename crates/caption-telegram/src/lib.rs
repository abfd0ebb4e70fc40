//! Telegram Bot API transport for the salon caption bot.
//!
//! This crate wraps the handful of Bot API methods the bot needs:
//! `getUpdates` long-polling, `sendMessage`, `answerCallbackQuery`,
//! `getMe`, plus the wire envelope types and the classification of raw
//! updates into domain events.
//!
//! The update cursor itself is owned by the dispatcher, not this crate:
//! `get_updates` takes whatever offset the caller supplies and performs
//! no retries, so retry and consumption policy live in one place.

pub mod api;
pub mod classify;
pub mod client;
pub mod error;
pub mod messenger;

pub use api::{CallbackQuery, Chat, Message, Update, User};
pub use classify::{classify, ClassifyError};
pub use client::TelegramClient;
pub use error::{Result, TelegramError};
pub use messenger::Messenger;
