//! Inbound events and outbound actions.
//!
//! The dispatcher classifies every raw transport update into an
//! [`InboundEvent`]; the state machine answers with [`OutboundAction`]s
//! and at most one [`GenerationRequest`]. Keeping both sides as plain
//! data keeps the state machine free of I/O.

use crate::ids::UserId;
use crate::plan::Plan;

/// A slash command recognized by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`: universal escape hatch, resets the conversation.
    Start,
    /// `/help`: usage guide.
    Help,
    /// `/services`: salon service list.
    Services,
    /// `/caption`: re-open the plan menu.
    Caption,
    /// Any other slash command; answered with a hint, no state change.
    Unknown(String),
}

impl Command {
    /// Parse a command from message text starting with `/`.
    ///
    /// Returns `None` if the text is not a command at all. Arguments
    /// after the command name are ignored.
    pub fn parse(text: &str) -> Option<Command> {
        if !text.starts_with('/') {
            return None;
        }
        let name = text.split_whitespace().next().unwrap_or(text);
        // Strip a bot-name suffix like "/start@my_bot".
        let name = name.split('@').next().unwrap_or(name);
        Some(match name {
            "/start" => Command::Start,
            "/help" => Command::Help,
            "/services" => Command::Services,
            "/caption" => Command::Caption,
            other => Command::Unknown(other.to_string()),
        })
    }
}

/// A classified inbound event, ready for the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A recognized or unknown slash command.
    Command(Command),
    /// Free text from the user.
    Text(String),
    /// An inline-keyboard button press, carrying its callback data.
    ButtonPress(String),
}

/// A button in an outbound menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    /// User-facing label.
    pub label: String,
    /// Callback data returned when pressed.
    pub data: String,
}

/// An inline menu attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    /// Button rows, outermost first.
    pub rows: Vec<Vec<MenuButton>>,
}

impl Menu {
    /// The plan-selection menu: one button per tier, one per row.
    pub fn plan_selection() -> Menu {
        Menu {
            rows: Plan::ALL
                .iter()
                .map(|plan| {
                    vec![MenuButton {
                        label: plan.label().to_string(),
                        data: plan.callback_data().to_string(),
                    }]
                })
                .collect(),
        }
    }
}

/// One side-effecting send for the dispatcher to execute.
///
/// Produced by the state machine as pure data, executed in emission
/// order through the transport client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundAction {
    /// Recipient.
    pub user_id: UserId,
    /// Message text.
    pub text: String,
    /// Optional inline menu.
    pub menu: Option<Menu>,
}

impl OutboundAction {
    /// A plain text reply.
    pub fn text(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
            menu: None,
        }
    }

    /// A text reply with an attached menu.
    pub fn with_menu(user_id: UserId, text: impl Into<String>, menu: Menu) -> Self {
        Self {
            user_id,
            text: text.into(),
            menu: Some(menu),
        }
    }
}

/// A request for the generation backend, emitted by the state machine
/// when a user has supplied plan, topic, and details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Selected service tier; picks the persona.
    pub plan: Plan,
    /// Caption topic.
    pub topic: String,
    /// Free-text details for this caption.
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse_known() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/services"), Some(Command::Services));
        assert_eq!(Command::parse("/caption"), Some(Command::Caption));
    }

    #[test]
    fn test_command_parse_with_bot_suffix_and_args() {
        assert_eq!(Command::parse("/start@salon_caption_bot"), Some(Command::Start));
        assert_eq!(Command::parse("/caption please"), Some(Command::Caption));
    }

    #[test]
    fn test_command_parse_unknown() {
        assert_eq!(
            Command::parse("/frobnicate"),
            Some(Command::Unknown("/frobnicate".to_string()))
        );
    }

    #[test]
    fn test_command_parse_non_command() {
        assert_eq!(Command::parse("hello"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_plan_selection_menu_covers_all_plans() {
        let menu = Menu::plan_selection();
        assert_eq!(menu.rows.len(), 3);
        let data: Vec<&str> = menu
            .rows
            .iter()
            .flat_map(|row| row.iter().map(|b| b.data.as_str()))
            .collect();
        assert_eq!(data, vec!["plan_basic", "plan_pro", "plan_vip"]);
    }
}
