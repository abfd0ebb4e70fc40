//! Conversation engine for the salon caption bot.
//!
//! Two pieces live here: the [`store::ConversationStore`], a bounded
//! in-memory map from user to conversation record, and the
//! [`machine`] module, the pure state machine that advances a record
//! in response to an inbound event. Neither does any I/O; the
//! dispatcher owns both and executes the actions they emit.

pub mod machine;
pub mod messages;
pub mod store;

pub use machine::{on_generation_failure, on_generation_success, transition, Transition};
pub use store::ConversationStore;
