//! The conversation state machine.
//!
//! Pure decision logic: given a record and an inbound event, produce
//! the next record, the outbound actions, and at most one generation
//! request. No I/O happens here; the dispatcher applies the record,
//! executes the actions, and feeds a generation outcome back through
//! [`on_generation_success`] / [`on_generation_failure`].

use caption_models::{
    Command, ConversationRecord, ConversationState, GenerationRequest, InboundEvent,
    OutboundAction, Plan, UserId,
};

use crate::messages;

/// The result of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The record to store back.
    pub record: ConversationRecord,
    /// Sends to execute, in emission order.
    pub actions: Vec<OutboundAction>,
    /// A generation call for the dispatcher to make, if the dialogue
    /// reached the details step.
    pub generation: Option<GenerationRequest>,
}

impl Transition {
    fn new(record: ConversationRecord) -> Self {
        Self {
            record,
            actions: Vec::new(),
            generation: None,
        }
    }

    fn with_action(mut self, action: OutboundAction) -> Self {
        self.actions.push(action);
        self
    }
}

/// Advance a conversation record for one inbound event.
pub fn transition(
    user_id: UserId,
    record: &ConversationRecord,
    event: &InboundEvent,
) -> Transition {
    match event {
        InboundEvent::Command(command) => on_command(user_id, record, command),
        InboundEvent::ButtonPress(data) => on_button(user_id, record, data),
        InboundEvent::Text(text) => on_text(user_id, record, text),
    }
}

/// Commands are receivable in any state.
fn on_command(user_id: UserId, record: &ConversationRecord, command: &Command) -> Transition {
    match command {
        // Universal escape hatch: fresh record, plan cleared.
        Command::Start => Transition::new(ConversationRecord::new()).with_action(
            OutboundAction::with_menu(user_id, messages::welcome(), messages::plan_menu()),
        ),
        Command::Help => Transition::new(record.clone())
            .with_action(OutboundAction::text(user_id, messages::help_text())),
        Command::Services => Transition::new(record.clone())
            .with_action(OutboundAction::text(user_id, messages::services_text())),
        // Re-open the plan menu; the selected plan survives so the
        // same tier can be re-picked without consequence.
        Command::Caption => {
            let mut next = record.clone();
            next.state = ConversationState::AwaitingPlan;
            next.topic = None;
            Transition::new(next).with_action(OutboundAction::with_menu(
                user_id,
                messages::choose_plan(),
                messages::plan_menu(),
            ))
        }
        Command::Unknown(name) => Transition::new(record.clone())
            .with_action(OutboundAction::text(user_id, messages::unknown_command(name))),
    }
}

fn on_button(user_id: UserId, record: &ConversationRecord, data: &str) -> Transition {
    match record.state {
        ConversationState::AwaitingPlan => match Plan::from_callback_data(data) {
            Some(plan) => {
                let mut next = record.clone();
                next.selected_plan = Some(plan);
                next.state = ConversationState::AwaitingTopic;
                Transition::new(next)
                    .with_action(OutboundAction::text(user_id, messages::prompt_topic(plan)))
            }
            // Malformed or replayed callback data: no state change,
            // no reply.
            None => Transition::new(record.clone()),
        },
        // Out-of-order button press while we expect free text.
        ConversationState::AwaitingTopic | ConversationState::AwaitingDetails => {
            Transition::new(record.clone())
                .with_action(OutboundAction::text(user_id, messages::expected_text_nudge()))
        }
    }
}

fn on_text(user_id: UserId, record: &ConversationRecord, text: &str) -> Transition {
    match record.state {
        // No plan chosen yet: pure informational nudge, state untouched.
        ConversationState::AwaitingPlan => Transition::new(record.clone()).with_action(
            OutboundAction::with_menu(user_id, messages::plan_guidance(), messages::plan_menu()),
        ),
        ConversationState::AwaitingTopic => {
            let mut next = record.clone();
            next.topic = Some(text.to_string());
            next.state = ConversationState::AwaitingDetails;
            Transition::new(next)
                .with_action(OutboundAction::text(user_id, messages::prompt_details(text)))
        }
        ConversationState::AwaitingDetails => {
            match (record.selected_plan, record.topic.as_ref()) {
                (Some(plan), Some(topic)) => {
                    let mut transition = Transition::new(record.clone()).with_action(
                        OutboundAction::text(user_id, messages::generating_notice()),
                    );
                    transition.generation = Some(GenerationRequest {
                        plan,
                        topic: topic.clone(),
                        details: text.to_string(),
                    });
                    transition
                }
                // Reachable only if the record was corrupted; restart
                // the cycle instead of generating from half a request.
                _ => {
                    let mut next = record.clone();
                    next.state = ConversationState::AwaitingPlan;
                    next.topic = None;
                    Transition::new(next).with_action(OutboundAction::with_menu(
                        user_id,
                        messages::choose_plan(),
                        messages::plan_menu(),
                    ))
                }
            }
        }
    }
}

/// Apply a successful generation: deliver the caption and reset the
/// cycle. The plan is preserved so the user can run another caption on
/// the same tier; the topic is consumed.
pub fn on_generation_success(
    user_id: UserId,
    record: &ConversationRecord,
    caption: &str,
) -> Transition {
    let mut next = record.clone();
    next.state = ConversationState::AwaitingPlan;
    next.topic = None;
    Transition::new(next)
        .with_action(OutboundAction::text(user_id, messages::caption_reply(caption)))
        .with_action(OutboundAction::with_menu(
            user_id,
            messages::next_caption_hint(),
            messages::plan_menu(),
        ))
}

/// Apply a failed generation: apologize and hold position. The state
/// stays at the details step with the topic intact, so the user only
/// re-sends the details.
pub fn on_generation_failure(user_id: UserId, record: &ConversationRecord) -> Transition {
    Transition::new(record.clone())
        .with_action(OutboundAction::text(user_id, messages::generation_failed()))
}
