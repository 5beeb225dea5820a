//! Background Feed Monitor
//!
//! A Tokio task that reloads the boost feed on an interval so card state keeps
//! up with the clock (boosts expire, winners get drawn). The latest feed is
//! published on a `watch` channel.

use crate::feed::{load_feed, BoostFeed, FeedSources};
use questboost_core::Address;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Default polling interval in seconds
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MonitorStatus {
    Running,
    Paused,
    Stopped,
}

/// Handle to control a running feed monitor
#[derive(Clone)]
pub struct FeedMonitorHandle {
    pause_tx: watch::Sender<bool>,
    feed_rx: watch::Receiver<Option<BoostFeed>>,
    cancel_token: CancellationToken,
    status: Arc<RwLock<MonitorStatus>>,
    interval_secs: Arc<RwLock<u64>>,
}

impl FeedMonitorHandle {
    /// Pause the monitor (it stops reloading but the task stays alive)
    pub async fn pause(&self) {
        let _ = self.pause_tx.send(true);
        *self.status.write().await = MonitorStatus::Paused;
        info!("Feed monitor paused");
    }

    pub async fn resume(&self) {
        let _ = self.pause_tx.send(false);
        *self.status.write().await = MonitorStatus::Running;
        info!("Feed monitor resumed");
    }

    /// Stop the monitor entirely (cannot be restarted, spawn a new one)
    pub async fn stop(&self) {
        self.cancel_token.cancel();
        *self.status.write().await = MonitorStatus::Stopped;
        info!("Feed monitor stopped");
    }

    pub async fn status(&self) -> MonitorStatus {
        *self.status.read().await
    }

    pub async fn set_interval(&self, secs: u64) {
        *self.interval_secs.write().await = secs.max(1);
        info!("Feed monitor interval set to {}s", secs.max(1));
    }

    pub async fn get_interval(&self) -> u64 {
        *self.interval_secs.read().await
    }

    /// Receiver that sees every newly published feed
    pub fn subscribe(&self) -> watch::Receiver<Option<BoostFeed>> {
        self.feed_rx.clone()
    }

    /// Most recently published feed, if any load finished yet
    pub fn latest(&self) -> Option<BoostFeed> {
        self.feed_rx.borrow().clone()
    }
}

/// Spawn the feed monitor. The first load runs immediately.
pub fn spawn_feed_monitor(
    sources: FeedSources,
    identity: Option<Address>,
    interval_secs: u64,
) -> FeedMonitorHandle {
    let (pause_tx, pause_rx) = watch::channel(false);
    let (feed_tx, feed_rx) = watch::channel(None);
    let cancel_token = CancellationToken::new();
    let status = Arc::new(RwLock::new(MonitorStatus::Running));
    let interval_secs = Arc::new(RwLock::new(interval_secs.max(1)));

    let handle = FeedMonitorHandle {
        pause_tx,
        feed_rx,
        cancel_token: cancel_token.clone(),
        status: status.clone(),
        interval_secs: interval_secs.clone(),
    };

    tokio::spawn(feed_monitor_loop(
        sources,
        identity,
        feed_tx,
        pause_rx,
        cancel_token,
        status,
        interval_secs,
    ));

    handle
}

async fn feed_monitor_loop(
    sources: FeedSources,
    identity: Option<Address>,
    feed_tx: watch::Sender<Option<BoostFeed>>,
    mut pause_rx: watch::Receiver<bool>,
    cancel_token: CancellationToken,
    status: Arc<RwLock<MonitorStatus>>,
    interval_secs: Arc<RwLock<u64>>,
) {
    info!("Feed monitor started (interval: {}s)", *interval_secs.read().await);

    let mut next_wait = Duration::ZERO;

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                info!("Feed monitor cancelled, exiting");
                break;
            }
            _ = tokio::time::sleep(next_wait) => {
                next_wait = Duration::from_secs(*interval_secs.read().await);

                if *pause_rx.borrow() {
                    debug!("Feed monitor is paused, skipping tick");
                    continue;
                }

                let feed = load_feed(&sources, identity.as_ref()).await;
                debug!("Feed tick: {} cards at {}", feed.cards.len(), feed.generated_at);
                feed_tx.send_replace(Some(feed));
            }
            // wake on pause changes so resume takes effect immediately
            changed = pause_rx.changed() => {
                if changed.is_err() {
                    debug!("Feed monitor handle dropped, exiting");
                    break;
                }
                if !*pause_rx.borrow() {
                    next_wait = Duration::ZERO;
                }
            }
        }
    }

    *status.write().await = MonitorStatus::Stopped;
    info!("Feed monitor loop exited");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::resolver::BoostDisplayState;
    use crate::sources::{BoostSource, ClaimStatusSource, CompletedQuestsSource};
    use async_trait::async_trait;
    use questboost_core::{Boost, BoostId, CompletedQuests, EpochMillis, Result};

    const NOW: EpochMillis = EpochMillis(1_700_000_000_000);

    struct OneBoost;

    #[async_trait]
    impl BoostSource for OneBoost {
        async fn fetch_boosts(&self) -> Result<Vec<Boost>> {
            Ok(vec![Boost {
                id: 1,
                name: "Nostra".to_string(),
                img_url: String::new(),
                quests: vec![1],
                amount: 10.0,
                token: "STRK".to_string(),
                expiry: NOW.plus_millis(1_000),
                winner: None,
            }])
        }
    }

    struct NoProgress;

    #[async_trait]
    impl CompletedQuestsSource for NoProgress {
        async fn fetch_completed_quests(&self, _address: &Address) -> Result<CompletedQuests> {
            Ok(CompletedQuests::default())
        }
    }

    struct NeverClaimed;

    #[async_trait]
    impl ClaimStatusSource for NeverClaimed {
        async fn claim_status(&self, _address: &Address, _boost_id: BoostId) -> Result<bool> {
            Ok(false)
        }
    }

    fn sources(clock: Arc<FixedClock>) -> FeedSources {
        FeedSources {
            boosts: Arc::new(OneBoost),
            completed_quests: Arc::new(NoProgress),
            claims: Arc::new(NeverClaimed),
            clock,
        }
    }

    #[tokio::test]
    async fn test_monitor_rederives_state_as_time_passes() {
        let clock = Arc::new(FixedClock::at(NOW));
        let identity = Address::parse("0x1").unwrap();
        let handle = spawn_feed_monitor(sources(clock.clone()), Some(identity), 1);
        let mut rx = handle.subscribe();

        rx.changed().await.unwrap();
        let first = handle.latest().unwrap();
        assert_eq!(first.card(1).unwrap().state, Some(BoostDisplayState::ShowReward));

        clock.advance(2_000);
        rx.changed().await.unwrap();
        let second = handle.latest().unwrap();
        assert_eq!(second.card(1).unwrap().state, Some(BoostDisplayState::BoostEndedNoWin));

        handle.stop().await;
        assert_eq!(handle.status().await, MonitorStatus::Stopped);
    }

    #[tokio::test]
    async fn test_pause_and_interval_controls() {
        let clock = Arc::new(FixedClock::at(NOW));
        let handle = spawn_feed_monitor(sources(clock), None, 30);

        assert_eq!(handle.get_interval().await, 30);
        handle.set_interval(0).await;
        assert_eq!(handle.get_interval().await, 1);

        handle.pause().await;
        assert_eq!(handle.status().await, MonitorStatus::Paused);
        handle.resume().await;
        assert_eq!(handle.status().await, MonitorStatus::Running);

        handle.stop().await;
    }
}
