//! Boost models for the /boost endpoints

use crate::types::{BoostId, EpochMillis, QuestId};
use serde::{Deserialize, Serialize};

/// A quest boost as returned by `GET /boost/get_boosts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    pub id: BoostId,
    pub name: String,
    #[serde(default)]
    pub img_url: String,
    /// Quests the user must complete to enter the lottery
    #[serde(default)]
    pub quests: Vec<QuestId>,
    /// Reward amount, in whole tokens
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub amount: f64,
    /// Reward token contract address
    pub token: String,
    /// Expiry in epoch milliseconds
    pub expiry: EpochMillis,
    /// Lottery winner, null until drawn
    #[serde(default)]
    pub winner: Option<String>,
}

impl Boost {
    /// True once `now` is strictly past the expiry
    pub fn is_expired(&self, now: EpochMillis) -> bool {
        now > self.expiry
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn quest_count(&self) -> usize {
        self.quests.len()
    }

    /// Navigation target of the boost detail page
    pub fn link_path(&self) -> String {
        format!("/quest-boost/{}", self.id)
    }
}

/// Deserialize an f64 that may arrive as a number or a numeric string
fn deserialize_f64_lenient<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct F64Lenient;

    impl<'de> de::Visitor<'de> for F64Lenient {
        type Value = f64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number or numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<f64, E> {
            v.trim().parse::<f64>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(F64Lenient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_boost() {
        let json = r#"{
            "id": 7,
            "name": "Starknet ID Tracking",
            "img_url": "/visuals/boost/rocket.webp",
            "quests": [1, 2, 3],
            "amount": 1000,
            "token": "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
            "expiry": 1700000000000,
            "winner": null,
            "hidden": false
        }"#;

        let boost: Boost = serde_json::from_str(json).unwrap();
        assert_eq!(boost.id, 7);
        assert_eq!(boost.quests, vec![1, 2, 3]);
        assert_eq!(boost.amount, 1000.0);
        assert_eq!(boost.expiry, EpochMillis::new(1_700_000_000_000));
        assert!(!boost.has_winner());
        assert_eq!(boost.link_path(), "/quest-boost/7");
    }

    #[test]
    fn test_amount_as_string() {
        let json = r#"{"id":1,"name":"b","quests":[],"amount":"12.5","token":"0x1","expiry":0,"winner":"0xabc"}"#;
        let boost: Boost = serde_json::from_str(json).unwrap();
        assert_eq!(boost.amount, 12.5);
        assert_eq!(boost.winner.as_deref(), Some("0xabc"));
    }

    #[test]
    fn test_expiry_is_strict() {
        let json = r#"{"id":1,"name":"b","quests":[1],"amount":1,"token":"0x1","expiry":5000}"#;
        let boost: Boost = serde_json::from_str(json).unwrap();
        assert!(!boost.is_expired(EpochMillis::new(5000)));
        assert!(boost.is_expired(EpochMillis::new(5001)));
    }
}
