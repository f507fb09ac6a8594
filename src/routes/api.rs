use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{history, queue, speak, tts, voices};
use crate::state::AppState;
use std::sync::Arc;

/// Create the `/api` router
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Broadcast control
        .route("/api/speak", post(speak::speak_handler))
        .route("/api/queue", get(queue::get_queue))
        .route("/api/pause", post(queue::set_pause))
        // Speech synthesis
        .route("/api/tts", post(tts::tts_handler))
        .route("/api/preview", get(tts::preview_handler))
        .route("/api/voices", get(voices::list_voices))
        .route("/api/history", get(history::get_history))
        .layer(TraceLayer::new_for_http())
}
