//! Completed-quest models for the /get_completed_quests endpoint

use crate::types::QuestId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Error payload the backend returns in place of data, e.g. `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    pub error: String,
}

/// Raw response of `GET /get_completed_quests?addr=...`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletedQuestsResponse {
    Quests(Vec<QuestId>),
    Error(QueryError),
}

/// Quests completed by the current user, or the reason they are unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletedQuests {
    Known(HashSet<QuestId>),
    Unavailable(QueryError),
}

impl CompletedQuests {
    pub fn from_ids<I: IntoIterator<Item = QuestId>>(ids: I) -> Self {
        CompletedQuests::Known(ids.into_iter().collect())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        CompletedQuests::Unavailable(QueryError {
            error: reason.into(),
        })
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, CompletedQuests::Unavailable(_))
    }

    pub fn contains(&self, quest: QuestId) -> bool {
        match self {
            CompletedQuests::Known(ids) => ids.contains(&quest),
            CompletedQuests::Unavailable(_) => false,
        }
    }

    /// True iff every quest in `required` was completed.
    ///
    /// An empty `required` list is vacuously complete, but only when the
    /// completed set is actually known.
    pub fn contains_all(&self, required: &[QuestId]) -> bool {
        match self {
            CompletedQuests::Known(ids) => required.iter().all(|q| ids.contains(q)),
            CompletedQuests::Unavailable(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CompletedQuests::Known(ids) => ids.len(),
            CompletedQuests::Unavailable(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CompletedQuests {
    fn default() -> Self {
        CompletedQuests::Known(HashSet::new())
    }
}

impl From<CompletedQuestsResponse> for CompletedQuests {
    fn from(response: CompletedQuestsResponse) -> Self {
        match response {
            CompletedQuestsResponse::Quests(ids) => CompletedQuests::from_ids(ids),
            CompletedQuestsResponse::Error(err) => CompletedQuests::Unavailable(err),
        }
    }
}
