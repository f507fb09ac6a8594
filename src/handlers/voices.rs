use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::core::tts::Voice;
use crate::errors::AppResult;
use crate::state::AppState;

/// `GET /api/voices` - voices from every backend that answered.
pub async fn list_voices(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Voice>>> {
    let voices = state.synthesizer.list_voices().await?;
    Ok(Json(voices))
}
