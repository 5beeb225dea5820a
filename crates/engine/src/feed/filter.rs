//! Feed filter - keeps boosts that are open or recently ended

use questboost_core::{Boost, EpochMillis, MILLISECONDS_PER_WEEK};

/// Weeks an ended boost stays listed so winners can still find and claim it
pub const FEED_GRACE_WEEKS: i64 = 3;

/// True if `boost` expired at most [`FEED_GRACE_WEEKS`] weeks before `now`.
///
/// Boosts that have not expired yet always pass. The boundary is inclusive.
pub fn is_within_grace_window(boost: &Boost, now: EpochMillis) -> bool {
    now.millis_since(boost.expiry) <= FEED_GRACE_WEEKS * MILLISECONDS_PER_WEEK
}

/// Select the boosts to list, preserving input order
pub fn filter_active_boosts(boosts: &[Boost], now: EpochMillis) -> Vec<Boost> {
    boosts
        .iter()
        .filter(|boost| is_within_grace_window(boost, now))
        .cloned()
        .collect()
}
