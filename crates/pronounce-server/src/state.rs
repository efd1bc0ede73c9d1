use std::sync::Arc;

use pronounce_acquire::{browser_client, DictionaryClient, HttpDownloader, PageFetcher};
use pronounce_merge::FfmpegMerger;

use crate::config::ServerConfig;
use crate::speak::SpeakService;

#[derive(Clone)]
pub struct AppState {
    pub speak_service: Arc<SpeakService>,
    pub fetcher: Arc<dyn PageFetcher>,
}

impl AppState {
    pub fn new(speak_service: Arc<SpeakService>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            speak_service,
            fetcher,
        }
    }

    /// Wire the production components: reqwest for pages and audio,
    /// ffmpeg for merging.
    pub fn from_config(config: &ServerConfig) -> reqwest::Result<Self> {
        let client = browser_client(&config.user_agent)?;
        let fetcher: Arc<dyn PageFetcher> =
            Arc::new(DictionaryClient::new(client.clone(), &config.dictionary_url));

        let mut service = SpeakService::new(
            Arc::clone(&fetcher),
            Arc::new(HttpDownloader::new(client)),
            Arc::new(FfmpegMerger::new(&config.ffmpeg)),
        );
        if let Some(root) = &config.work_dir {
            service = service.with_work_root(root);
        }

        Ok(Self::new(Arc::new(service), fetcher))
    }
}
