use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{debug, info};

use super::decode_json;
use crate::core::tts::AudioClip;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Sentence spoken by `GET /api/preview`
pub const PREVIEW_TEXT: &str = "Hi! I am going to sound like this";

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default)]
    pub voice: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub voice: String,
}

fn audio_response(clip: AudioClip) -> Response {
    ([(header::CONTENT_TYPE, clip.content_type)], clip.data).into_response()
}

/// `POST /api/tts` - synthesize `text` and return the audio bytes.
pub async fn tts_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Response> {
    let request: TtsRequest = decode_json(&body)?;
    if request.text.is_empty() {
        return Err(AppError::BadRequest("Missing text".to_string()));
    }

    let clip = state
        .synthesizer
        .synthesize(&request.text, &request.voice)
        .await?;
    info!(
        voice = %request.voice,
        bytes = clip.len(),
        "Synthesized speech"
    );
    state.history.record(request.text);

    Ok(audio_response(clip))
}

/// `GET /api/preview?voice=` - a short sample of the given voice.
pub async fn preview_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PreviewQuery>,
) -> AppResult<Response> {
    debug!(voice = %query.voice, "Voice preview requested");
    let clip = state
        .synthesizer
        .synthesize(PREVIEW_TEXT, &query.voice)
        .await?;
    Ok(audio_response(clip))
}
