//! In-memory conversation store.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use caption_models::{ConversationRecord, UserId};

/// Default maximum number of live records.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Default idle lifetime of a record.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct Entry {
    record: ConversationRecord,
    last_seen: Instant,
}

/// Mapping from user to conversation record, with explicit bounds.
///
/// The dispatcher is the single writer: records are cloned out via
/// [`get_or_create`](Self::get_or_create) and written back via
/// [`set`](Self::set) after a transition, so no entry is ever
/// read-modified-written by two paths.
///
/// Growth is bounded two ways: entries idle longer than the TTL are
/// swept on access, and when the capacity is reached the
/// least-recently-seen record is evicted to make room. An evicted user
/// simply starts over at the initial state on their next message.
pub struct ConversationStore {
    entries: HashMap<UserId, Entry>,
    capacity: usize,
    ttl: Duration,
}

impl ConversationStore {
    /// Create a store with the given bounds.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Create a store with the default bounds.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    /// Return the user's record, creating one at the initial state on
    /// first contact.
    pub fn get_or_create(&mut self, user_id: UserId) -> ConversationRecord {
        self.get_or_create_at(user_id, Instant::now())
    }

    /// Replace the user's record. Last write wins.
    pub fn set(&mut self, user_id: UserId, record: ConversationRecord) {
        self.set_at(user_id, record, Instant::now());
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a record exists for the user.
    pub fn contains(&self, user_id: UserId) -> bool {
        self.entries.contains_key(&user_id)
    }

    /// Read a record without touching its recency.
    pub fn get(&self, user_id: UserId) -> Option<&ConversationRecord> {
        self.entries.get(&user_id).map(|entry| &entry.record)
    }

    fn get_or_create_at(&mut self, user_id: UserId, now: Instant) -> ConversationRecord {
        self.sweep_expired(now);

        if let Some(entry) = self.entries.get_mut(&user_id) {
            entry.last_seen = now;
            return entry.record.clone();
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        debug!(user_id = %user_id, "new conversation record");
        self.entries.insert(
            user_id,
            Entry {
                record: ConversationRecord::new(),
                last_seen: now,
            },
        );
        ConversationRecord::new()
    }

    fn set_at(&mut self, user_id: UserId, record: ConversationRecord, now: Instant) {
        self.entries.insert(
            user_id,
            Entry {
                record,
                last_seen: now,
            },
        );
    }

    fn sweep_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.duration_since(entry.last_seen) < ttl);
        let swept = before - self.entries.len();
        if swept > 0 {
            debug!(swept, "expired conversation records removed");
        }
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest) = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_seen)
            .map(|(user_id, _)| *user_id)
        {
            debug!(user_id = %oldest, "capacity reached, evicting least recent record");
            self.entries.remove(&oldest);
        }
    }
}
