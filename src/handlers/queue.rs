use std::sync::Arc;

use axum::{extract::State, response::Json};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use super::decode_json;
use crate::errors::AppResult;
use crate::state::AppState;

/// `GET /api/queue` - pending texts, oldest first. Always an array.
pub async fn get_queue(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(
        state
            .hub
            .snapshot()
            .into_iter()
            .map(|event| event.text)
            .collect(),
    )
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PauseState {
    /// A body without `paused` resumes delivery.
    #[serde(default)]
    pub paused: bool,
}

/// `POST /api/pause` - suspend or resume delivery. Resuming replays the
/// queue to connected listeners at the configured interval.
pub async fn set_pause(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<PauseState>> {
    let request: PauseState = decode_json(&body)?;
    let paused = state.hub.set_paused(request.paused);
    Ok(Json(PauseState { paused }))
}
