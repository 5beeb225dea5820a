//! HTTP transport for the quest boost backend

mod client;

pub use client::{QuestBoostClient, DEFAULT_API_BASE};
