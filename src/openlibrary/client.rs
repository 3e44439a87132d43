use crate::config::Config;
use crate::openlibrary::models::SearchResponse;
use crate::openlibrary::query::SearchQuery;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("book-finder/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum OpenLibraryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
    covers_url: String,
}

impl OpenLibraryClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build configured HTTP client, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.api_url.clone(),
            covers_url: config.covers_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn covers_url(&self) -> &str {
        &self.covers_url
    }

    /// Run one search against search.json
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, OpenLibraryError> {
        let url = query.url(&self.base_url);

        info!("📡 Open Library API: GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let body = response.bytes().await?;
            let search_response: SearchResponse = serde_json::from_slice(&body)?;

            info!(
                "✓ Open Library returned {} doc(s) of {} match(es)",
                search_response.docs.len(),
                search_response.num_found
            );
            Ok(search_response)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("✗ Open Library rate limit exceeded");
            Err(OpenLibraryError::RateLimit)
        } else {
            warn!("✗ Open Library API error: {}", status);
            Err(OpenLibraryError::Status(status))
        }
    }
}
