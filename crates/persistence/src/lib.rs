//! Quest Boost Persistence - Claim-status store and boost cache

pub mod cache;
pub mod sqlite;

pub use cache::BoostCache;
pub use sqlite::Database;
