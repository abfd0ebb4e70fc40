//! Core data models for the salon caption bot.
//!
//! This crate provides the fundamental data types shared across the bot:
//! user identifiers, service plans, conversation state, inbound events,
//! and outbound actions. Everything here is plain data, no I/O.

pub mod conversation;
pub mod event;
pub mod ids;
pub mod plan;

// Re-export main types
pub use conversation::{ConversationRecord, ConversationState};
pub use event::{Command, GenerationRequest, InboundEvent, Menu, MenuButton, OutboundAction};
pub use ids::UserId;
pub use plan::Plan;
