use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use super::decode_json;
use crate::core::broadcast::{PublishOutcome, SpeakEvent};
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    #[serde(default)]
    pub voice: Option<String>,
}

/// `POST /api/speak` - announce `text` to every open event stream, or queue
/// it when nobody is listening or delivery is paused.
pub async fn speak_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<StatusCode> {
    let request: SpeakRequest = decode_json(&body)?;
    if request.text.is_empty() {
        return Err(AppError::BadRequest("Missing text".to_string()));
    }

    let mut event = SpeakEvent::new(request.text);
    if let Some(voice) = request.voice {
        event = event.with_voice(voice);
    }

    match state.hub.publish(event) {
        PublishOutcome::Queued { pending } => info!(pending, "Speak event queued"),
        PublishOutcome::Broadcast(fan_out) => info!(
            delivered = fan_out.delivered,
            dropped = fan_out.dropped,
            "Speak event broadcast"
        ),
    }

    Ok(StatusCode::NO_CONTENT)
}
