//! Typed identifiers.

use std::fmt;

/// Identifier of a conversation's owner, the Telegram chat id.
///
/// The sole key into the conversation store. Opaque beyond equality
/// and hashing; no uniqueness is assumed beyond what the transport
/// guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId(42).to_string(), "42");
        assert_eq!(UserId(-100123).to_string(), "-100123");
    }

    #[test]
    fn test_user_id_from_i64() {
        let id: UserId = 7i64.into();
        assert_eq!(id, UserId(7));
    }
}
