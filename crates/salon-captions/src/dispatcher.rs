//! The update dispatcher and polling loop.
//!
//! One indefinite cycle: poll → advance cursor → classify → route →
//! apply → repeat. The cursor advances per batch *before* any dispatch
//! side effects, so a crash mid-batch skips events rather than
//! reprocessing them (at-most-once bias). Failures executing an
//! outbound action are logged and never abort the loop or roll back an
//! applied transition.

use std::time::Duration;

use tracing::{debug, info, warn};

use caption_agent::CaptionSource;
use caption_core::{machine, ConversationStore};
use caption_models::{InboundEvent, OutboundAction, UserId};
use caption_telegram::{classify, Messenger, TelegramClient, Update};

/// Pause after a failed poll before retrying with the same cursor.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Pause after an empty batch. The long-poll window is the primary
/// throttle; this only guards against a tight spin on transient empty
/// results.
const IDLE_DELAY: Duration = Duration::from_millis(500);

/// Routes classified events through the conversation engine and
/// executes the resulting actions.
///
/// Generic over the outbound and generation ports so batches can be
/// driven against in-memory fakes in tests. The dispatcher owns the
/// store and is its single writer.
pub struct Dispatcher<M: Messenger, G: CaptionSource> {
    messenger: M,
    generator: G,
    store: ConversationStore,
    offset: i64,
}

impl<M: Messenger, G: CaptionSource> Dispatcher<M, G> {
    /// Create a dispatcher starting at cursor 0.
    pub fn new(messenger: M, generator: G, store: ConversationStore) -> Self {
        Self {
            messenger,
            generator,
            store,
            offset: 0,
        }
    }

    /// The current cursor: last consumed update id + 1.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Read-only view of the conversation store.
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Consume one poll batch.
    ///
    /// The cursor jumps past the whole batch up front; updates below
    /// the previous cursor are replays and are dropped without
    /// touching any record.
    pub async fn process_batch(&mut self, updates: &[Update]) {
        let previous = self.offset;
        if let Some(top) = updates.iter().map(|u| u.update_id).max() {
            self.offset = self.offset.max(top + 1);
        }

        for update in updates {
            if update.update_id < previous {
                debug!(update_id = update.update_id, "replayed update skipped");
                continue;
            }
            self.process_update(update).await;
        }
    }

    async fn process_update(&mut self, update: &Update) {
        let (user_id, event) = match classify(update) {
            Ok(classified) => classified,
            Err(e) => {
                warn!(error = %e, "dropping unclassifiable update");
                return;
            }
        };

        debug!(user_id = %user_id, ?event, "dispatching event");
        self.handle_event(user_id, &event).await;
    }

    /// Advance one user's conversation and execute the emitted actions.
    async fn handle_event(&mut self, user_id: UserId, event: &InboundEvent) {
        let record = self.store.get_or_create(user_id);
        let transition = machine::transition(user_id, &record, event);

        // Store before executing: a failed send must not roll the
        // conversation back.
        self.store.set(user_id, transition.record.clone());
        self.execute(&transition.actions).await;

        if let Some(request) = transition.generation {
            let outcome = match self.generator.generate(&request).await {
                Ok(caption) => {
                    info!(user_id = %user_id, plan = %request.plan, "caption generated");
                    machine::on_generation_success(user_id, &transition.record, &caption)
                }
                Err(e) => {
                    warn!(user_id = %user_id, error = %e, "caption generation failed");
                    machine::on_generation_failure(user_id, &transition.record)
                }
            };
            self.store.set(user_id, outcome.record.clone());
            self.execute(&outcome.actions).await;
        }
    }

    async fn execute(&self, actions: &[OutboundAction]) {
        for action in actions {
            if let Err(e) = self
                .messenger
                .send(action.user_id, &action.text, action.menu.as_ref())
                .await
            {
                warn!(user_id = %action.user_id, error = %e, "failed to deliver reply");
            }
        }
    }
}

/// Run the polling loop forever.
///
/// A failed poll retries with the cursor unchanged; nothing was
/// consumed. Button presses are acknowledged best-effort before
/// dispatch so the client's spinner clears even if handling fails.
pub async fn run<G: CaptionSource>(telegram: TelegramClient, generator: G) {
    let mut dispatcher = Dispatcher::new(
        telegram.clone(),
        generator,
        ConversationStore::with_defaults(),
    );

    loop {
        let updates = match telegram.get_updates(dispatcher.offset()).await {
            Ok(updates) => updates,
            Err(e) => {
                warn!(error = %e, "poll failed, retrying with unchanged cursor");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        if updates.is_empty() {
            tokio::time::sleep(IDLE_DELAY).await;
            continue;
        }

        for update in &updates {
            if let Some(query) = &update.callback_query {
                if let Err(e) = telegram.answer_callback_query(&query.id).await {
                    debug!(error = %e, "failed to acknowledge callback query");
                }
            }
        }

        dispatcher.process_batch(&updates).await;
    }
}
