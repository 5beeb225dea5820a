//! SQLite database management

mod claims;
mod connection;

pub use claims::*;
pub use connection::Database;
