//! Quest Boost Engine - Feed filtering, boost state resolution, and feed loading

pub mod clock;
pub mod feed;
pub mod monitor;
pub mod resolver;
pub mod sources;

pub use clock::{Clock, FixedClock, SystemClock};
pub use feed::{filter_active_boosts, load_feed, BoostFeed, FeedSources};
pub use monitor::{spawn_feed_monitor, FeedMonitorHandle, MonitorStatus};
pub use resolver::{resolve_boost_state, BoostCard, BoostDisplayState};
pub use sources::{BoostSource, ClaimStatusSource, CompletedQuestsSource};
