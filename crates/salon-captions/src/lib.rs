//! Salon caption bot: the update dispatcher and process bootstrap.
//!
//! The binary wires the Telegram transport, the generation backend,
//! and the conversation engine together: a single sequential polling
//! loop pulls batches of updates, advances a monotonic cursor so each
//! update is consumed at most once, and routes every event through the
//! per-user state machine.

pub mod config;
pub mod dispatcher;

pub use config::{BotConfig, ConfigError};
pub use dispatcher::Dispatcher;
