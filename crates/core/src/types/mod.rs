//! Shared type definitions and newtypes

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boost identifier as served by the backend
pub type BoostId = u32;

/// Quest identifier as served by the backend
pub type QuestId = u32;

pub const MILLISECONDS_PER_SECOND: i64 = 1_000;
pub const MILLISECONDS_PER_DAY: i64 = 24 * 60 * 60 * MILLISECONDS_PER_SECOND;
pub const MILLISECONDS_PER_WEEK: i64 = 7 * MILLISECONDS_PER_DAY;

/// A point in time as milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochMillis(pub i64);

impl EpochMillis {
    pub fn new(millis: i64) -> Self {
        EpochMillis(millis)
    }

    /// Current wall-clock time
    pub fn now() -> Self {
        EpochMillis(chrono::Utc::now().timestamp_millis())
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self` (negative if `earlier` is later)
    pub fn millis_since(&self, earlier: EpochMillis) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn plus_millis(&self, millis: i64) -> Self {
        EpochMillis(self.0.saturating_add(millis))
    }

    pub fn minus_millis(&self, millis: i64) -> Self {
        EpochMillis(self.0.saturating_sub(millis))
    }

    /// Convert to a UTC datetime, if representable
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S UTC")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// Wallet address of the signed-in user.
///
/// Normalized to trimmed lowercase so `0xABC` and `0xabc` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Error::InvalidData("Wallet address is empty".to_string()));
        }
        Ok(Address(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Address::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_constant() {
        assert_eq!(MILLISECONDS_PER_WEEK, 604_800_000);
    }

    #[test]
    fn test_address_normalization() {
        let a = Address::parse("  0xABCdef ").unwrap();
        let b = Address::parse("0xabcdef").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "0xabcdef");
    }

    #[test]
    fn test_empty_address_rejected() {
        assert!(Address::parse("   ").is_err());
    }

    #[test]
    fn test_millis_since_is_signed() {
        let earlier = EpochMillis::new(1_000);
        let later = EpochMillis::new(4_000);
        assert_eq!(later.millis_since(earlier), 3_000);
        assert_eq!(earlier.millis_since(later), -3_000);
    }

    #[test]
    fn test_display_formats_utc() {
        let t = EpochMillis::new(0);
        assert_eq!(t.to_string(), "1970-01-01 00:00:00 UTC");
    }
}
