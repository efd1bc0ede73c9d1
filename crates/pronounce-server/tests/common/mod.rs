#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;

use pronounce_acquire::{AudioDownloader, DownloadError, FetchError, PageFetcher};
use pronounce_merge::{AudioMerger, MergeError};
use pronounce_server::SpeakService;

pub const ORIGIN: &str = "https://audio.test";

/// Dictionary pages built from a table of word -> audio `src` values.
#[derive(Default)]
pub struct FakeDictionary {
    entries: HashMap<String, Vec<String>>,
    failing: Vec<String>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, word: &str, srcs: &[&str]) -> Self {
        self.entries
            .insert(word.to_string(), srcs.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn failing(mut self, word: &str) -> Self {
        self.failing.push(word.to_string());
        self
    }

    pub fn page(&self, word: &str) -> String {
        let buttons: String = self
            .entries
            .get(word)
            .map(|srcs| {
                srcs.iter()
                    .map(|src| {
                        format!(
                            r#"<button data-audiosrc="{src}" data-audioorigin="{ORIGIN}">play</button>"#
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        format!("<html><body><h1>{word}</h1>{buttons}</body></html>")
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FakeDictionary {
    async fn fetch_page(&self, word: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(word.to_string());
        if self.failing.iter().any(|w| w == word) {
            return Err(FetchError::Status {
                url: format!("https://dictionary.test/browse/{word}"),
                status: StatusCode::SERVICE_UNAVAILABLE,
            });
        }
        Ok(self.page(word))
    }
}

/// Writes `<url>` into each destination and remembers what it fetched.
#[derive(Default)]
pub struct RecordingDownloader {
    failing_url: Option<String>,
    pub downloads: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(url: &str) -> Self {
        Self {
            failing_url: Some(url.to_string()),
            ..Self::default()
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.downloads
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.downloads
            .lock()
            .unwrap()
            .iter()
            .map(|(_, path)| path.clone())
            .collect()
    }
}

#[async_trait]
impl AudioDownloader for RecordingDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        self.downloads
            .lock()
            .unwrap()
            .push((url.to_string(), dest.to_path_buf()));

        if self.failing_url.as_deref() == Some(url) {
            // Leave a partial file behind like a broken stream would.
            std::fs::write(dest, b"<part").unwrap();
            return Err(DownloadError::Write {
                path: dest.to_path_buf(),
                source: std::io::Error::other("connection reset mid-stream"),
            });
        }

        let body = format!("<{url}>");
        std::fs::write(dest, &body).map_err(|source| DownloadError::Write {
            path: dest.to_path_buf(),
            source,
        })?;
        Ok(body.len() as u64)
    }
}

/// Concatenates input bytes, or fails on demand.
#[derive(Default)]
pub struct FakeMerger {
    fail: bool,
    pub calls: Mutex<Vec<Vec<PathBuf>>>,
}

impl FakeMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<PathBuf>> {
        self.calls.lock().unwrap().clone()
    }

    /// File names of the single merge call's inputs.
    pub fn input_names(&self) -> Vec<String> {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one merge call");
        calls[0]
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }
}

#[async_trait]
impl AudioMerger for FakeMerger {
    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), MergeError> {
        self.calls.lock().unwrap().push(inputs.to_vec());
        if self.fail {
            return Err(MergeError::NoInputs);
        }

        let mut merged = Vec::new();
        for input in inputs {
            merged.extend(std::fs::read(input).expect("merge input exists"));
        }
        std::fs::write(output, merged).unwrap();
        Ok(())
    }
}

pub struct Harness {
    pub dictionary: Arc<FakeDictionary>,
    pub downloader: Arc<RecordingDownloader>,
    pub merger: Arc<FakeMerger>,
    pub work_root: tempfile::TempDir,
    pub service: Arc<SpeakService>,
}

impl Harness {
    pub fn new(dictionary: FakeDictionary) -> Self {
        Self::with_parts(dictionary, RecordingDownloader::new(), FakeMerger::new())
    }

    pub fn with_parts(
        dictionary: FakeDictionary,
        downloader: RecordingDownloader,
        merger: FakeMerger,
    ) -> Self {
        let dictionary = Arc::new(dictionary);
        let downloader = Arc::new(downloader);
        let merger = Arc::new(merger);
        let work_root = tempfile::TempDir::new().unwrap();

        let service = SpeakService::new(
            dictionary.clone(),
            downloader.clone(),
            merger.clone(),
        )
        .with_work_root(work_root.path());

        Self {
            dictionary,
            downloader,
            merger,
            work_root,
            service: Arc::new(service),
        }
    }

    /// Scratch directories left behind under the work root.
    pub fn leftovers(&self) -> usize {
        std::fs::read_dir(self.work_root.path()).unwrap().count()
    }
}

pub fn url(src: &str) -> String {
    format!("{ORIGIN}/{src}")
}
