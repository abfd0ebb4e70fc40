//! Classification of raw updates into domain events.

use thiserror::Error;

use crate::api::Update;
use caption_models::{Command, InboundEvent, UserId};

/// An update whose shape the bot does not recognize.
///
/// Dropped by the dispatcher with a log entry: no reply, no state
/// mutation.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Neither a text message nor a button press.
    #[error("update {0} has no recognizable payload")]
    UnrecognizedShape(i64),
    /// A callback query without data to act on.
    #[error("update {0} carries a callback query without data")]
    EmptyCallback(i64),
}

/// Classify a raw update as a command, free text, or button press,
/// keyed by the chat it belongs to.
pub fn classify(update: &Update) -> Result<(UserId, InboundEvent), ClassifyError> {
    if let Some(message) = &update.message {
        let user_id = UserId(message.chat.id);
        let text = message
            .text
            .as_deref()
            .ok_or(ClassifyError::UnrecognizedShape(update.update_id))?;

        let event = match Command::parse(text) {
            Some(command) => InboundEvent::Command(command),
            None => InboundEvent::Text(text.trim().to_string()),
        };
        return Ok((user_id, event));
    }

    if let Some(query) = &update.callback_query {
        // Route to the chat the keyboard lives in; fall back to the
        // pressing user for keyboards whose message has expired.
        let user_id = query
            .message
            .as_ref()
            .map(|m| UserId(m.chat.id))
            .unwrap_or(UserId(query.from.id));

        let data = query
            .data
            .as_deref()
            .ok_or(ClassifyError::EmptyCallback(update.update_id))?;
        return Ok((user_id, InboundEvent::ButtonPress(data.to_string())));
    }

    Err(ClassifyError::UnrecognizedShape(update.update_id))
}
