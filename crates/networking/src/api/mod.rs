//! High-level API wrappers for quest boost endpoints
//!
//! Thin helpers over the raw HTTP client that log what they fetched.

mod boosts;

pub use boosts::*;
