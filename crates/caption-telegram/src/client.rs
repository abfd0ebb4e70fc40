//! HTTP client for the Bot API.

use std::time::Duration;

use tracing::{debug, trace};

use crate::api::{
    AnswerCallbackQueryRequest, ApiResponse, BotInfo, GetUpdatesRequest, InlineKeyboardMarkup,
    SendMessageRequest, Update,
};
use crate::error::{Result, TelegramError};
use caption_models::UserId;

/// Default server-side long-poll window for `getUpdates`.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for short calls (`sendMessage`, `getMe`, ...).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Headroom added to the long-poll window for the socket timeout, so a
/// server legitimately holding the connection open is not treated as a
/// timeout.
const POLL_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// Client for the Bot API.
///
/// Every method is a single attempt: retry policy lives in the
/// dispatcher, and a failed send is at-most-once by construction.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    poll_timeout: Duration,
}

impl TelegramClient {
    /// Create a client for the given bot token.
    pub fn new(token: &str, poll_timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("https://api.telegram.org/bot{token}"),
            poll_timeout,
        }
    }

    /// Verify the token and return the bot's username.
    pub async fn get_me(&self) -> Result<String> {
        let response = self
            .http
            .get(format!("{}/getMe", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        let info: BotInfo = Self::unwrap_envelope(response).await?;
        Ok(info.username)
    }

    /// Long-poll for updates at or above `offset`.
    ///
    /// The server holds the request for up to the configured poll
    /// window; the socket timeout exceeds that window so the wait is
    /// not itself an error. The transport may re-deliver updates below
    /// `offset`; the dispatcher's monotonic cursor is what prevents
    /// reprocessing.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let request = GetUpdatesRequest {
            offset,
            timeout: self.poll_timeout.as_secs(),
            allowed_updates: vec!["message", "callback_query"],
        };
        trace!(offset, "polling for updates");

        let response = self
            .http
            .post(format!("{}/getUpdates", self.base_url))
            .timeout(self.poll_timeout + POLL_TIMEOUT_MARGIN)
            .json(&request)
            .send()
            .await?;

        let updates: Vec<Update> = Self::unwrap_envelope(response).await?;
        if !updates.is_empty() {
            debug!(count = updates.len(), offset, "received updates");
        }
        Ok(updates)
    }

    /// Send a text message, optionally with an inline keyboard.
    pub async fn send_message(
        &self,
        chat_id: UserId,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        let request = SendMessageRequest {
            chat_id: chat_id.0,
            text: text.to_string(),
            reply_markup,
        };

        let response = self
            .http
            .post(format!("{}/sendMessage", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let _: serde_json::Value = Self::unwrap_envelope(response).await?;
        debug!(chat_id = %chat_id, "message sent");
        Ok(())
    }

    /// Acknowledge a button press so the client stops its spinner.
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<()> {
        let request = AnswerCallbackQueryRequest {
            callback_query_id: callback_query_id.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/answerCallbackQuery", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let _: serde_json::Value = Self::unwrap_envelope(response).await?;
        Ok(())
    }

    /// Check status and the `ok` field, then pull out `result`.
    async fn unwrap_envelope<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description: body,
            });
        }

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TelegramError::Malformed(e.to_string()))?;

        if !envelope.ok {
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description: envelope
                    .description
                    .unwrap_or_else(|| "ok=false with no description".to_string()),
            });
        }

        envelope
            .result
            .ok_or_else(|| TelegramError::Malformed("ok=true but result missing".to_string()))
    }
}
