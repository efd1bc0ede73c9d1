use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::normalize::normalize_word;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot look up an empty word")]
    EmptyWord,

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Source of raw dictionary entry pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw HTML of the entry page for `word`.
    async fn fetch_page(&self, word: &str) -> Result<String, FetchError>;
}

/// Build the shared HTTP client, identifying as a browser.
pub fn browser_client(user_agent: &str) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(user_agent).build()
}

/// Fetches entry pages from a dictionary site laid out as `{base_url}/{word}`.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Entry page URL for a word, after normalization.
    pub fn page_url(&self, word: &str) -> Result<String, FetchError> {
        let word = normalize_word(word);
        if word.is_empty() {
            return Err(FetchError::EmptyWord);
        }
        Ok(format!("{}/{}", self.base_url, word))
    }
}

#[async_trait]
impl PageFetcher for DictionaryClient {
    async fn fetch_page(&self, word: &str) -> Result<String, FetchError> {
        let url = self.page_url(word)?;
        tracing::debug!(url = %url, "Fetching dictionary page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let html = response
            .text()
            .await
            .map_err(|source| FetchError::Body {
                url: url.clone(),
                source,
            })?;
        tracing::debug!(url = %url, bytes = html.len(), "Received HTML");

        Ok(html)
    }
}
