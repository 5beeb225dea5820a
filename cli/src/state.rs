//! Application state shared by CLI commands

use crate::config::CliConfig;
use questboost_engine::{FeedSources, SystemClock};
use questboost_networking::QuestBoostClient;
use questboost_persistence::{BoostCache, Database};
use std::sync::Arc;

pub struct AppState {
    pub config: CliConfig,
    pub client: Arc<QuestBoostClient>,
    pub db: Arc<Database>,
}

impl AppState {
    /// Build the HTTP client and open the claim store
    pub async fn new(config: CliConfig) -> questboost_core::Result<Self> {
        let cache = Arc::new(BoostCache::default());
        let client = QuestBoostClient::new_with_cache(&config.api_base, cache)?;
        let db = Database::connect(&config.db_path()).await?;

        Ok(Self {
            config,
            client: Arc::new(client),
            db: Arc::new(db),
        })
    }

    pub fn feed_sources(&self) -> FeedSources {
        FeedSources {
            boosts: self.client.clone(),
            completed_quests: self.client.clone(),
            claims: self.db.clone(),
            clock: Arc::new(SystemClock),
        }
    }
}
