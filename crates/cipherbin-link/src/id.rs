//! Unguessable message identifiers.

use std::fmt;

use uuid::Uuid;

/// Length of the hyphenated identifier form.
pub const MESSAGE_ID_LEN: usize = 36;

/// Storage lookup identifier for a message, independent of its key.
///
/// A random UUID v4: 122 bits of randomness, enough that guessing or
/// enumerating valid identifiers is computationally infeasible. Uniqueness
/// is probabilistic (birthday-bound), not centrally coordinated. The
/// hyphenated lowercase form is [`MESSAGE_ID_LEN`] characters from
/// `[0-9a-f-]`, safe inside a URL query component without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn is_url_safe(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
    }

    #[test]
    fn identifier_is_36_chars() {
        assert_eq!(MessageId::random().to_string().len(), MESSAGE_ID_LEN);
    }

    #[test]
    fn identifier_avoids_link_separators() {
        for _ in 0..100 {
            let id = MessageId::random().to_string();
            assert!(is_url_safe(&id), "identifier {id} needs escaping");
        }
    }

    #[test]
    fn ten_thousand_identifiers_are_unique() {
        // Statistical sanity check, not a strict guarantee.
        let ids: HashSet<String> = (0..10_000).map(|_| MessageId::random().to_string()).collect();
        assert_eq!(ids.len(), 10_000);
    }
}
