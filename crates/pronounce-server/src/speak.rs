use std::path::{Path, PathBuf};
use std::sync::Arc;

use pronounce_acquire::{AudioDownloader, PageFetcher, PronunciationExtractor};
use pronounce_merge::AudioMerger;
use pronounce_model::{content_type_for, ClipKey, PronunciationMode, AUDIO_EXTENSION};
use tempfile::TempDir;

use crate::error::SpeakError;

/// Word spoken between alternate pronunciations of the same word.
pub const CONNECTOR_WORD: &str = "or";

/// Merged audio ready to send back.
#[derive(Debug, Clone)]
pub struct MergedAudio {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Scrape, download and merge pronunciations for a phrase.
///
/// Each call works in its own scratch directory holding the clips and the
/// merged output. The directory is removed when the call returns, whatever
/// the outcome.
pub struct SpeakService {
    extractor: PronunciationExtractor,
    downloader: Arc<dyn AudioDownloader>,
    merger: Arc<dyn AudioMerger>,
    work_root: Option<PathBuf>,
}

impl SpeakService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        downloader: Arc<dyn AudioDownloader>,
        merger: Arc<dyn AudioMerger>,
    ) -> Self {
        Self {
            extractor: PronunciationExtractor::new(fetcher),
            downloader,
            merger,
            work_root: None,
        }
    }

    /// Create scratch directories under `root` instead of the system temp dir.
    pub fn with_work_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.work_root = Some(root.into());
        self
    }

    pub async fn speak(&self, text: &str, mode: PronunciationMode) -> Result<MergedAudio, SpeakError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        tracing::info!(words = ?words, mode = ?mode, "Speaking");

        let mut scratch = Scratch::new(self.work_root.as_deref());
        let clips = self.collect_clips(&words, mode, &mut scratch).await?;
        if clips.is_empty() {
            return Err(SpeakError::NoAudioFound);
        }

        let output = scratch.path()?.join(format!("output.{AUDIO_EXTENSION}"));
        self.merger.merge(&clips, &output).await?;

        let bytes = tokio::fs::read(&output).await?;
        tracing::info!(clips = clips.len(), bytes = bytes.len(), "Merged audio");

        Ok(MergedAudio {
            bytes,
            content_type: content_type_for(&output),
        })
    }

    /// Download every selected clip in playback order.
    async fn collect_clips(
        &self,
        words: &[&str],
        mode: PronunciationMode,
        scratch: &mut Scratch<'_>,
    ) -> Result<Vec<PathBuf>, SpeakError> {
        let mut clips = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let word = word.to_lowercase();
            let urls = self.extractor.audio_urls(&word).await?;
            tracing::info!(word = %word, urls = ?urls, "Resolved pronunciations");

            let selected = mode.select(&urls);
            for (j, url) in selected.iter().enumerate() {
                let key = ClipKey::Pronunciation { word: i, index: j };
                clips.push(self.download_clip(url, key, scratch).await?);

                // Connectors only go between pronunciations of the same word.
                if j + 1 < selected.len() {
                    if let Some(path) = self.download_connector(i, j, scratch).await? {
                        clips.push(path);
                    }
                }
            }
        }

        Ok(clips)
    }

    async fn download_clip(
        &self,
        url: &str,
        key: ClipKey,
        scratch: &mut Scratch<'_>,
    ) -> Result<PathBuf, SpeakError> {
        let path = scratch.path()?.join(key.file_name(AUDIO_EXTENSION));
        self.downloader.download(url, &path).await?;
        Ok(path)
    }

    async fn download_connector(
        &self,
        word: usize,
        index: usize,
        scratch: &mut Scratch<'_>,
    ) -> Result<Option<PathBuf>, SpeakError> {
        let urls = self.extractor.audio_urls(CONNECTOR_WORD).await?;
        let Some(url) = urls.first() else {
            tracing::warn!(connector = CONNECTOR_WORD, "No pronunciation for connector, skipping");
            return Ok(None);
        };

        let key = ClipKey::Connector { word, index };
        self.download_clip(url, key, scratch).await.map(Some)
    }
}

/// Per-request scratch directory, created on first use and removed on drop.
struct Scratch<'a> {
    root: Option<&'a Path>,
    dir: Option<TempDir>,
}

impl<'a> Scratch<'a> {
    fn new(root: Option<&'a Path>) -> Self {
        Self { root, dir: None }
    }

    fn path(&mut self) -> std::io::Result<PathBuf> {
        let dir = match self.dir.take() {
            Some(dir) => dir,
            None => {
                let mut builder = tempfile::Builder::new();
                builder.prefix("pronounce-");
                match self.root {
                    Some(root) => builder.tempdir_in(root)?,
                    None => builder.tempdir()?,
                }
            }
        };
        Ok(self.dir.insert(dir).path().to_path_buf())
    }
}
