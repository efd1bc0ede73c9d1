use std::sync::Arc;

use pronounce_model::PronunciationCandidate;
use scraper::{Html, Selector};

use crate::fetch::{FetchError, PageFetcher};

const AUDIO_SRC_ATTR: &str = "data-audiosrc";
const AUDIO_ORIGIN_ATTR: &str = "data-audioorigin";

/// Resolves a word to the audio URLs of its dominant pronunciation group.
#[derive(Clone)]
pub struct PronunciationExtractor {
    fetcher: Arc<dyn PageFetcher>,
}

impl PronunciationExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch the entry page for `word` and return its dominant-group audio
    /// URLs in page order. Empty when the page carries no audio.
    pub async fn audio_urls(&self, word: &str) -> Result<Vec<String>, FetchError> {
        let html = self.fetcher.fetch_page(word).await?;
        let candidates = extract_candidates(&html);
        let urls = dominant_urls(&candidates);

        tracing::debug!(
            word = %word,
            candidates = candidates.len(),
            prefix = ?dominant_prefix(&candidates),
            kept = urls.len(),
            "Extracted pronunciations"
        );

        Ok(urls)
    }
}

/// Collect every element carrying both audio attributes, in document order.
/// Elements where either attribute is empty are skipped.
pub fn extract_candidates(html: &str) -> Vec<PronunciationCandidate> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!("[{AUDIO_SRC_ATTR}][{AUDIO_ORIGIN_ATTR}]"))
        .expect("valid selector");

    document
        .select(&selector)
        .filter_map(|el| {
            let origin = el.value().attr(AUDIO_ORIGIN_ATTR)?;
            let src = el.value().attr(AUDIO_SRC_ATTR)?;
            if origin.is_empty() || src.is_empty() {
                return None;
            }
            Some(PronunciationCandidate::new(origin, src))
        })
        .collect()
}

/// The most frequent grouping prefix. On a tie the prefix seen first wins.
pub fn dominant_prefix(candidates: &[PronunciationCandidate]) -> Option<&str> {
    // Insertion order is first-seen order.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for candidate in candidates {
        let prefix = candidate.prefix();
        match counts.iter_mut().find(|(p, _)| *p == prefix) {
            Some((_, n)) => *n += 1,
            None => counts.push((prefix, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (prefix, n) in counts {
        if best.map_or(true, |(_, max)| n > max) {
            best = Some((prefix, n));
        }
    }
    best.map(|(prefix, _)| prefix)
}

/// URLs of the candidates whose `src` starts with the dominant prefix,
/// keeping their relative order.
pub fn dominant_urls(candidates: &[PronunciationCandidate]) -> Vec<String> {
    let Some(prefix) = dominant_prefix(candidates) else {
        return Vec::new();
    };

    candidates
        .iter()
        .filter(|c| c.src.starts_with(prefix))
        .map(PronunciationCandidate::url)
        .collect()
}
