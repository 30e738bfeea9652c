//! Expense identifiers
//!
//! Ids assigned by the remote store are opaque strings, so `ExpenseId` wraps
//! a `String` rather than a UUID. Locally generated ids combine the current
//! timestamp with a random suffix, both in base 36.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of base-36 digits taken from the random component
const RANDOM_DIGITS: usize = 11;

/// Opaque, stable identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a fresh id for a locally created expense
    ///
    /// Unique with overwhelming probability within a process. Not a
    /// security token.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis().max(0) as u128;
        let random = to_base36(Uuid::new_v4().as_u128());
        // Low digits: the version/variant bits of a v4 UUID sit higher up
        let suffix = &random[random.len().saturating_sub(RANDOM_DIGITS)..];
        Self(format!("{}{}", to_base36(millis), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ExpenseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<ExpenseId> = (0..1000).map(|_| ExpenseId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generated_id_is_alphanumeric() {
        let id = ExpenseId::generate();
        assert!(id.as_str().len() > RANDOM_DIGITS);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ExpenseId::from("1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1\"");
        let back: ExpenseId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back.as_str(), "abc");
    }
}
