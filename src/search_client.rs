use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

use crate::data_models::{Query, SearchResponse};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search api url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search api returned status {status}")]
    Status { status: u16 },
}

/// Anything that can answer a query with a list of results.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &Query) -> Result<SearchResponse, SearchError>;
}

/// Talks to the external `GET /api/search?q=` endpoint.
pub struct HttpSearchClient {
    client: Client,
    endpoint: Url,
}

impl HttpSearchClient {
    pub const SEARCH_PATH: &'static str = "/api/search";

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), Self::SEARCH_PATH);
        let endpoint = Url::parse(&endpoint).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search(&self, query: &Query) -> Result<SearchResponse, SearchError> {
        log::info!("searching {} for {:?}", self.endpoint, query.as_str());

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("search api answered {status} for {:?}", query.as_str());
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let results: SearchResponse = response.json().await?;
        log::info!("{} results for {:?}", results.len(), query.as_str());
        Ok(results)
    }
}
