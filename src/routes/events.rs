//! Event stream route configuration

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::events::events_handler;
use crate::state::AppState;
use std::sync::Arc;

/// Create the event stream router
///
/// # Endpoint
///
/// `GET /events` - Server-Sent Events stream
///
/// Each speak event arrives as `data: <text>\n\n`. Events queued while no
/// listener was connected are replayed first, oldest first. Idle streams
/// receive periodic keep-alive comments.
pub fn create_events_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(events_handler))
        .layer(TraceLayer::new_for_http())
}
