//! Data models for quest boost entities

mod boost;
mod quest;

pub use boost::*;
pub use quest::*;
