use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::state::AppState;

/// `GET /api/history` - recently synthesized texts, oldest first.
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.history.snapshot())
}
