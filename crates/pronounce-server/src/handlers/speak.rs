use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pronounce_model::PronunciationMode;
use serde::Deserialize;
use serde_json::Value;

use crate::error::SpeakError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    /// Only a JSON `true` selects every pronunciation; anything else,
    /// including a missing field, means the first one only.
    #[serde(default)]
    pub all: Value,
}

impl SpeakRequest {
    pub fn mode(&self) -> PronunciationMode {
        PronunciationMode::from_all_flag(self.all == Value::Bool(true))
    }
}

#[tracing::instrument(skip_all)]
pub async fn speak_handler(
    State(state): State<AppState>,
    Json(request): Json<SpeakRequest>,
) -> Result<Response, SpeakError> {
    let audio = state
        .speak_service
        .speak(&request.text, request.mode())
        .await?;

    Ok(([(header::CONTENT_TYPE, audio.content_type)], audio.bytes).into_response())
}
