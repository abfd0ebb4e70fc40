//! Service plan tiers.

use std::fmt;

/// The service plan a user selects.
///
/// Controls the persona used for caption generation. Parsed from the
/// callback data carried by the plan-selection keyboard; anything that
/// is not one of the three known values is treated as malformed and
/// ignored by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Short, friendly captions.
    Basic,
    /// Marketing-grade captions with hashtags.
    Pro,
    /// Luxury-toned captions for premium salons.
    Vip,
}

impl Plan {
    /// All plans, in menu order.
    pub const ALL: [Plan; 3] = [Plan::Basic, Plan::Pro, Plan::Vip];

    /// The callback data emitted by this plan's keyboard button.
    pub fn callback_data(&self) -> &'static str {
        match self {
            Plan::Basic => "plan_basic",
            Plan::Pro => "plan_pro",
            Plan::Vip => "plan_vip",
        }
    }

    /// Parse a plan from button callback data.
    ///
    /// Returns `None` for unknown data (malformed or replayed callbacks).
    pub fn from_callback_data(data: &str) -> Option<Plan> {
        match data {
            "plan_basic" => Some(Plan::Basic),
            "plan_pro" => Some(Plan::Pro),
            "plan_vip" => Some(Plan::Vip),
            _ => None,
        }
    }

    /// User-facing label for menu buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Plan::Basic => "پایه 💅",
            Plan::Pro => "حرفه‌ای 🌟",
            Plan::Vip => "ویژه 👑",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Basic => write!(f, "basic"),
            Plan::Pro => write!(f, "pro"),
            Plan::Vip => write!(f, "vip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_data_round_trip() {
        for plan in Plan::ALL {
            assert_eq!(Plan::from_callback_data(plan.callback_data()), Some(plan));
        }
    }

    #[test]
    fn test_unknown_callback_data() {
        assert_eq!(Plan::from_callback_data("plan_gold"), None);
        assert_eq!(Plan::from_callback_data(""), None);
        assert_eq!(Plan::from_callback_data("vip"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Plan::Vip.to_string(), "vip");
    }
}
