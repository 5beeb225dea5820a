//! Error types and Result alias for the quest boost feed

use thiserror::Error;

/// Main error type for the quest boost feed
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Boost not found: {0}")]
    BoostNotFound(u32),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::BoostNotFound(7).to_string(), "Boost not found: 7");

        let parse_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert!(matches!(Error::from(parse_err), Error::InvalidData(_)));
    }
}
