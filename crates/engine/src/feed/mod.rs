//! Boost feed: filtering and loading

mod filter;
mod loader;

pub use filter::{filter_active_boosts, is_within_grace_window, FEED_GRACE_WEEKS};
pub use loader::{load_feed, BoostFeed, FeedSources, NO_BOOSTS_MESSAGE};
