//! CLI configuration read from the environment

use questboost_core::{Address, Error, Result};
use questboost_networking::http::DEFAULT_API_BASE;
use std::path::PathBuf;

pub const ENV_API_URL: &str = "QUESTBOOST_API_URL";
pub const ENV_ADDRESS: &str = "QUESTBOOST_ADDRESS";
pub const ENV_DATA_DIR: &str = "QUESTBOOST_DATA_DIR";
pub const ENV_POLL_SECS: &str = "QUESTBOOST_POLL_SECS";

const DEFAULT_POLL_SECS: u64 = 60;
const DB_FILE: &str = "questboost.db";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api_base: String,
    /// Signed-in wallet; `None` browses the feed signed out
    pub address: Option<Address>,
    pub data_dir: PathBuf,
    pub poll_secs: u64,
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base = non_empty(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(Error::ConfigError(format!(
                "{} must be an http(s) URL, got {}",
                ENV_API_URL, api_base
            )));
        }

        let address = non_empty(ENV_ADDRESS)
            .map(|raw| Address::parse(&raw))
            .transpose()?;

        let data_dir = non_empty(ENV_DATA_DIR)
            .map(PathBuf::from)
            .or_else(|| dirs_next::data_local_dir().map(|p| p.join("QuestBoost")))
            .unwrap_or_else(|| PathBuf::from("."));

        let poll_secs = match non_empty(ENV_POLL_SECS) {
            Some(raw) => raw.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                Error::ConfigError(format!(
                    "{} must be a positive number of seconds, got {}",
                    ENV_POLL_SECS, raw
                ))
            })?,
            None => DEFAULT_POLL_SECS,
        };

        Ok(Self {
            api_base,
            address,
            data_dir,
            poll_secs,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<CliConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[(ENV_DATA_DIR, "/tmp/qb")]).unwrap();
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert!(cfg.address.is_none());
        assert_eq!(cfg.poll_secs, 60);
        assert_eq!(cfg.db_path(), PathBuf::from("/tmp/qb/questboost.db"));
    }

    #[test]
    fn test_blank_address_means_signed_out() {
        let cfg = config(&[(ENV_ADDRESS, "  ")]).unwrap();
        assert!(cfg.address.is_none());
    }

    #[test]
    fn test_address_is_normalized() {
        let cfg = config(&[(ENV_ADDRESS, "0xABC")]).unwrap();
        assert_eq!(cfg.address.unwrap().as_str(), "0xabc");
    }

    #[test]
    fn test_bad_poll_interval() {
        assert!(matches!(
            config(&[(ENV_POLL_SECS, "0")]),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            config(&[(ENV_POLL_SECS, "soon")]),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_api_url_must_be_http() {
        assert!(config(&[(ENV_API_URL, "ftp://example.com")]).is_err());
        let cfg = config(&[(ENV_API_URL, "http://localhost:8080")]).unwrap();
        assert_eq!(cfg.api_base, "http://localhost:8080");
    }
}
