use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Return the raw dictionary page for a word, for inspecting what the
/// scraper sees.
pub async fn debug_handler(State(state): State<AppState>, Path(word): Path<String>) -> Response {
    match state.fetcher.fetch_page(&word).await {
        Ok(html) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            html,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(word = %word, error = %e, "Debug fetch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch page").into_response()
        }
    }
}
