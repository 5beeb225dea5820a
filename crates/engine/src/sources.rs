//! Data sources the feed reads from
//!
//! Boosts, quest progress and claim status all sit behind async traits so the
//! loader treats them the same way and tests can swap in fakes.

use async_trait::async_trait;
use questboost_core::{Address, Boost, BoostId, CompletedQuests, Result};
use questboost_networking::QuestBoostClient;
use questboost_persistence::{sqlite, Database};

#[async_trait]
pub trait BoostSource: Send + Sync {
    async fn fetch_boosts(&self) -> Result<Vec<Boost>>;
}

#[async_trait]
pub trait CompletedQuestsSource: Send + Sync {
    async fn fetch_completed_quests(&self, address: &Address) -> Result<CompletedQuests>;
}

#[async_trait]
pub trait ClaimStatusSource: Send + Sync {
    async fn claim_status(&self, address: &Address, boost_id: BoostId) -> Result<bool>;
}

#[async_trait]
impl BoostSource for QuestBoostClient {
    async fn fetch_boosts(&self) -> Result<Vec<Boost>> {
        self.get_boosts().await
    }
}

#[async_trait]
impl CompletedQuestsSource for QuestBoostClient {
    async fn fetch_completed_quests(&self, address: &Address) -> Result<CompletedQuests> {
        self.get_completed_quests(address).await
    }
}

#[async_trait]
impl ClaimStatusSource for Database {
    async fn claim_status(&self, address: &Address, boost_id: BoostId) -> Result<bool> {
        sqlite::get_claim_status(self.pool(), address, boost_id).await
    }
}
