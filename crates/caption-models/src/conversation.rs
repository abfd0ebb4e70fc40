//! Per-user conversation state.

use crate::plan::Plan;

/// Where a user currently is in the caption dialogue.
///
/// The cycle is plan → topic → details, then back to plan once a
/// caption has been produced. Adding a state here forces every match
/// in the transition function to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// Waiting for the user to pick a service plan (initial state).
    AwaitingPlan,
    /// Plan chosen; waiting for the caption topic.
    AwaitingTopic,
    /// Topic supplied; waiting for details to generate from.
    AwaitingDetails,
}

/// Mutable per-user record tracking progress through the dialogue.
///
/// One exists per user that has sent at least one event since process
/// start. Mutated only by the state machine's transition functions,
/// applied by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRecord {
    /// Current dialogue state.
    pub state: ConversationState,
    /// Selected plan. Persists across caption cycles so a user can
    /// request another caption without re-selecting the tier.
    pub selected_plan: Option<Plan>,
    /// Caption topic. Set in `AwaitingTopic`, consumed on a successful
    /// generation, preserved when generation fails.
    pub topic: Option<String>,
}

impl ConversationRecord {
    /// A fresh record at the initial state.
    pub fn new() -> Self {
        Self {
            state: ConversationState::AwaitingPlan,
            selected_plan: None,
            topic: None,
        }
    }
}

impl Default for ConversationRecord {
    fn default() -> Self {
        Self::new()
    }
}
