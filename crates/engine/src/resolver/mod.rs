//! Boost state resolution
//!
//! Turns a boost plus the user's progress into the card the feed shows.

mod card;
mod rules;

pub use card::{BoostCard, BoostDisplayState};
pub use rules::{has_user_completed_boost, is_clickable, resolve_boost_state};
