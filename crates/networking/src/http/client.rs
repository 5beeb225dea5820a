//! Quest boost HTTP client

use questboost_core::{
    Address, Boost, BoostId, CompletedQuests, CompletedQuestsResponse, Error, QueryError, Result,
};
use questboost_persistence::BoostCache;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Response,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

pub const DEFAULT_API_BASE: &str = "https://api.starknet.quest";
const USER_AGENT_VALUE: &str = concat!("questboost/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the quest boost backend
///
/// Every call is a single request with no retry. Optionally keeps fetched
/// boosts in a shared [`BoostCache`] so detail lookups can skip the network.
pub struct QuestBoostClient {
    http: Client,
    api_base: String,
    cache: Option<Arc<BoostCache>>,
}

impl QuestBoostClient {
    /// Create a new client against `api_base` (e.g. `https://api.starknet.quest`)
    pub fn new(api_base: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            cache: None,
        })
    }

    /// Create a new client with a shared boost cache
    pub fn new_with_cache(api_base: &str, cache: Arc<BoostCache>) -> Result<Self> {
        let mut client = Self::new(api_base)?;
        client.cache = Some(cache);
        Ok(client)
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .http
            .get(url)
            .headers(Self::default_headers())
            .send()
            .await?;

        debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }

    /// Fetch every boost known to the backend
    #[instrument(skip(self))]
    pub async fn get_boosts(&self) -> Result<Vec<Boost>> {
        let url = self.endpoint("boost/get_boosts");

        let response = self.get(&url).await?.error_for_status().map_err(|e| {
            error!("Boosts request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let boosts: Vec<Boost> = response.json().await.map_err(|e| {
            error!("Failed to parse boosts response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Fetched {} boosts", boosts.len());

        if let Some(ref cache) = self.cache {
            cache.insert_all(&boosts);
        }

        Ok(boosts)
    }

    /// Fetch a single boost (cache-aware)
    #[instrument(skip(self))]
    pub async fn get_boost(&self, id: BoostId) -> Result<Boost> {
        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.get(id) {
                debug!("Cache hit for boost {}", id);
                return Ok(cached);
            }
        }

        let url = format!("{}?id={}", self.endpoint("boost/get_boost"), id);
        let response = self.get(&url).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::BoostNotFound(id));
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Boost request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let boost: Boost = response.json().await.map_err(|e| {
            error!("Failed to parse boost response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        if let Some(ref cache) = self.cache {
            cache.insert(boost.clone());
        }

        Ok(boost)
    }

    /// Fetch the quests completed by `address`.
    ///
    /// An `{"error": ...}` payload is not an `Err`: it comes back as
    /// [`CompletedQuests::Unavailable`] so callers can degrade instead of failing.
    #[instrument(skip(self, address), fields(address = %address))]
    pub async fn get_completed_quests(&self, address: &Address) -> Result<CompletedQuests> {
        let url = format!(
            "{}?addr={}",
            self.endpoint("get_completed_quests"),
            address.as_str()
        );

        let response = self.get(&url).await?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read completed quests body: {}", e);
            Error::NetworkError(e.to_string())
        })?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<QueryError>(&body) {
                warn!("Completed quests unavailable (HTTP {}): {}", status, err.error);
                return Ok(CompletedQuests::Unavailable(err));
            }
            error!("Completed quests request failed: HTTP {}", status);
            return Err(Error::ApiError(format!("HTTP {}: {}", status, body)));
        }

        let parsed: CompletedQuestsResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse completed quests: {}. Body preview: {}",
                e,
                body.chars().take(200).collect::<String>()
            );
            Error::InvalidData(e.to_string())
        })?;

        let completed = CompletedQuests::from(parsed);
        if let CompletedQuests::Unavailable(ref err) = completed {
            warn!("Completed quests unavailable: {}", err.error);
        } else {
            debug!("Fetched {} completed quests", completed.len());
        }
        Ok(completed)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn cache(&self) -> Option<&Arc<BoostCache>> {
        self.cache.as_ref()
    }
}
