use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("stream from {url} broke off: {source}")]
    Stream { url: String, source: reqwest::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

/// Copies a remote audio resource to a local file.
#[async_trait]
pub trait AudioDownloader: Send + Sync {
    /// Download `url` into `dest`, replacing any existing file.
    /// Returns the number of bytes written.
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError>;
}

/// Streams audio over HTTP straight to disk, one body chunk at a time.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AudioDownloader for HttpDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| DownloadError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status,
            });
        }

        let write_err = |source| DownloadError::Write {
            path: dest.to_path_buf(),
            source,
        };
        let mut file = File::create(dest).await.map_err(write_err)?;

        let mut written: u64 = 0;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|source| DownloadError::Stream {
                url: url.to_string(),
                source,
            })?
        {
            file.write_all(&chunk).await.map_err(write_err)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(write_err)?;

        tracing::debug!(url = %url, path = %dest.display(), bytes = written, "Downloaded audio");
        Ok(written)
    }
}
