//! Wire types for the slice of the Bot API the bot consumes.
//!
//! Only the fields the core needs are modeled; everything else in the
//! Telegram envelopes is ignored by serde.

use serde::{Deserialize, Serialize};

/// The standard Bot API response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Payload, present when `ok` is true.
    pub result: Option<T>,
    /// Error description, present when `ok` is false.
    pub description: Option<String>,
}

/// One inbound update, carrying its sequence number and either a
/// message or a callback-query envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Update {
    /// Monotonically increasing sequence number.
    pub update_id: i64,
    /// Present for plain text messages and commands.
    #[serde(default)]
    pub message: Option<Message>,
    /// Present for inline-keyboard button presses.
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

/// A message envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Chat the message was sent in.
    pub chat: Chat,
    /// Text content, absent for stickers, photos, etc.
    #[serde(default)]
    pub text: Option<String>,
}

/// A chat reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Chat identifier.
    pub id: i64,
}

/// The sender of a callback query.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: i64,
}

/// A button-press envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    /// Query id, needed to acknowledge the press.
    pub id: String,
    /// The user who pressed the button.
    pub from: User,
    /// The message the keyboard was attached to.
    #[serde(default)]
    pub message: Option<Message>,
    /// The button's callback data.
    #[serde(default)]
    pub data: Option<String>,
}

/// `getMe` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BotInfo {
    /// Bot username, without the leading `@`.
    pub username: String,
}

// --- Outbound request bodies ---

/// `getUpdates` request body.
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest {
    /// Lower bound: last consumed update id + 1.
    pub offset: i64,
    /// Server-side long-poll window, seconds.
    pub timeout: u64,
    /// Update kinds we care about.
    pub allowed_updates: Vec<&'static str>,
}

/// `sendMessage` request body.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    /// Target chat.
    pub chat_id: i64,
    /// Message text.
    pub text: String,
    /// Optional inline keyboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// `answerCallbackQuery` request body.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerCallbackQueryRequest {
    /// Query to acknowledge.
    pub callback_query_id: String,
}

/// An inline keyboard attached to an outbound message.
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    /// Button rows.
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// One inline keyboard button.
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    /// Button label.
    pub text: String,
    /// Data sent back in the callback query when pressed.
    pub callback_data: String,
}

impl InlineKeyboardMarkup {
    /// Render a domain [`Menu`](caption_models::Menu) as a keyboard.
    pub fn from_menu(menu: &caption_models::Menu) -> Self {
        Self {
            inline_keyboard: menu
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|button| InlineKeyboardButton {
                            text: button.label.clone(),
                            callback_data: button.data.clone(),
                        })
                        .collect()
                })
                .collect(),
        }
    }
}
