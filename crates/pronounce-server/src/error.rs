use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pronounce_acquire::{DownloadError, FetchError};
use pronounce_merge::MergeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeakError {
    #[error("no audio found for any words")]
    NoAudioFound,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error("work directory: {0}")]
    Io(#[from] std::io::Error),
}

impl SpeakError {
    pub fn status(&self) -> StatusCode {
        match self {
            SpeakError::NoAudioFound => StatusCode::BAD_REQUEST,
            SpeakError::Fetch(_) | SpeakError::Download(_) => StatusCode::BAD_GATEWAY,
            SpeakError::Merge(_) | SpeakError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the caller. Upstream details stay in the server log.
    pub fn public_message(&self) -> &'static str {
        match self {
            SpeakError::NoAudioFound => "No audio found for any words.",
            SpeakError::Fetch(_) | SpeakError::Download(_) => {
                "Failed to fetch pronunciation audio."
            }
            SpeakError::Merge(_) => "Audio merge failed.",
            SpeakError::Io(_) => "Internal server error.",
        }
    }
}

impl IntoResponse for SpeakError {
    fn into_response(self) -> Response {
        match &self {
            SpeakError::NoAudioFound => tracing::info!("No audio files found"),
            other => tracing::error!(error = %other, "Speak request failed"),
        }
        (self.status(), self.public_message()).into_response()
    }
}
