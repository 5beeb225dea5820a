//! Feed loader
//!
//! Fetches boosts and the user's quest progress side by side, waits for both,
//! then filters and resolves one card per boost. Failures never abort the
//! load: they are logged and the affected input falls back to its empty value.

use super::filter::filter_active_boosts;
use crate::clock::Clock;
use crate::resolver::{resolve_boost_state, BoostCard};
use crate::sources::{BoostSource, ClaimStatusSource, CompletedQuestsSource};
use questboost_core::{Address, Boost, BoostId, CompletedQuests, EpochMillis};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

pub const NO_BOOSTS_MESSAGE: &str = "No quests are being boosted at the moment.";

/// Everything the loader reads from
#[derive(Clone)]
pub struct FeedSources {
    pub boosts: Arc<dyn BoostSource>,
    pub completed_quests: Arc<dyn CompletedQuestsSource>,
    pub claims: Arc<dyn ClaimStatusSource>,
    pub clock: Arc<dyn Clock>,
}

/// Cards resolved for one user at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoostFeed {
    pub cards: Vec<BoostCard>,
    pub generated_at: EpochMillis,
    /// False when quest progress could not be fetched and cards were degraded
    pub progress_available: bool,
}

impl BoostFeed {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, boost_id: BoostId) -> Option<&BoostCard> {
        self.cards.iter().find(|c| c.boost_id == boost_id)
    }
}

impl fmt::Display for BoostFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return writeln!(f, "{}", NO_BOOSTS_MESSAGE);
        }
        for card in &self.cards {
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}

async fn load_boosts(source: &dyn BoostSource) -> Vec<Boost> {
    match source.fetch_boosts().await {
        Ok(boosts) => boosts,
        Err(e) => {
            warn!("Error while fetching boosts: {}", e);
            Vec::new()
        }
    }
}

async fn load_completed_quests(
    source: &dyn CompletedQuestsSource,
    identity: Option<&Address>,
) -> Option<CompletedQuests> {
    let address = identity?;
    match source.fetch_completed_quests(address).await {
        Ok(completed) => Some(completed),
        Err(e) => {
            warn!("Error while fetching completed quests: {}", e);
            Some(CompletedQuests::unavailable(e.to_string()))
        }
    }
}

async fn load_claim_status(
    source: &dyn ClaimStatusSource,
    address: &Address,
    boost_id: BoostId,
) -> bool {
    match source.claim_status(address, boost_id).await {
        Ok(claimed) => claimed,
        Err(e) => {
            warn!("Error while reading claim status of boost {}: {}", boost_id, e);
            false
        }
    }
}

/// Look up the claim status of every listed boost at once.
///
/// Boosts missing from the result read as unclaimed.
async fn load_claim_statuses(
    source: &Arc<dyn ClaimStatusSource>,
    identity: Option<&Address>,
    boosts: &[Boost],
) -> HashMap<BoostId, bool> {
    let mut statuses = HashMap::with_capacity(boosts.len());
    let Some(address) = identity else {
        return statuses;
    };

    let mut lookups = JoinSet::new();
    for boost in boosts {
        let source = Arc::clone(source);
        let address = address.clone();
        let boost_id = boost.id;
        lookups.spawn(async move {
            let claimed = load_claim_status(source.as_ref(), &address, boost_id).await;
            (boost_id, claimed)
        });
    }

    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok((boost_id, claimed)) => {
                statuses.insert(boost_id, claimed);
            }
            Err(e) => warn!("Claim status lookup task failed: {}", e),
        }
    }
    statuses
}

/// Load and resolve the boost feed for `identity` (or a signed-out visitor).
///
/// The progress fetch is skipped when there is no identity. "Now" is read once,
/// after both fetches have settled.
pub async fn load_feed(sources: &FeedSources, identity: Option<&Address>) -> BoostFeed {
    let (boosts, completed) = tokio::join!(
        load_boosts(sources.boosts.as_ref()),
        load_completed_quests(sources.completed_quests.as_ref(), identity),
    );

    let now = sources.clock.now();
    let listed = filter_active_boosts(&boosts, now);
    debug!("{} of {} boosts within the feed window", listed.len(), boosts.len());

    let claims = load_claim_statuses(&sources.claims, identity, &listed).await;
    let cards: Vec<BoostCard> = listed
        .iter()
        .map(|boost| {
            let claimed = claims.get(&boost.id).copied().unwrap_or(false);
            resolve_boost_state(boost, completed.as_ref(), claimed, now, identity)
        })
        .collect();

    let progress_available = !completed.as_ref().is_some_and(CompletedQuests::is_unavailable);
    info!(
        "Feed resolved: {} cards{}",
        cards.len(),
        if progress_available { "" } else { " (quest progress unavailable)" }
    );

    BoostFeed {
        cards,
        generated_at: now,
        progress_available,
    }
}
