//! Everything that talks to the dictionary site: page fetching,
//! pronunciation scraping and audio download.

pub mod download;
pub mod extract;
pub mod fetch;
pub mod normalize;

pub use download::{AudioDownloader, DownloadError, HttpDownloader};
pub use extract::PronunciationExtractor;
pub use fetch::{browser_client, DictionaryClient, FetchError, PageFetcher};

/// Default dictionary entry URL; the word is appended as a path segment.
pub const DEFAULT_DICTIONARY_URL: &str = "https://www.dictionary.com/browse";

/// Identification sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
