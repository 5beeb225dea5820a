//! Boost API operations

use crate::QuestBoostClient;
use questboost_core::{Boost, BoostId, Result};
use tracing::info;

/// Fetch one boost by id, logging what was found
pub async fn fetch_boost(client: &QuestBoostClient, id: BoostId) -> Result<Boost> {
    let boost = client.get_boost(id).await?;
    info!(
        "Boost {} \"{}\": {} {} for {} quest(s), expires {}",
        boost.id,
        boost.name,
        boost.amount,
        boost.token,
        boost.quest_count(),
        boost.expiry
    );
    Ok(boost)
}
