use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{debug_handler, speak_handler};
use crate::state::AppState;

pub fn create_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/speak", post(speak_handler))
        .route("/debug/{word}", get(debug_handler))
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(trace_layer)
        .with_state(state)
}
