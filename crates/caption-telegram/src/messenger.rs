//! Outbound-send port.

use async_trait::async_trait;

use crate::api::InlineKeyboardMarkup;
use crate::client::TelegramClient;
use crate::error::Result;
use caption_models::{Menu, UserId};

/// The dispatcher's outbound seam.
///
/// Implemented by [`TelegramClient`] in production; tests drive the
/// dispatcher with an in-memory fake to observe emitted sends.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver one message, at most once. No internal retry.
    async fn send(&self, user_id: UserId, text: &str, menu: Option<&Menu>) -> Result<()>;
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send(&self, user_id: UserId, text: &str, menu: Option<&Menu>) -> Result<()> {
        let markup = menu.map(InlineKeyboardMarkup::from_menu);
        self.send_message(user_id, text, markup).await
    }
}
