//! Quest Boost Networking - HTTP client and API wrappers

pub mod api;
pub mod http;

pub use http::QuestBoostClient;
