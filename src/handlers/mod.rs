//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `events` - Server-Sent Events stream of speak events
//! - `speak` - Publish a speak event
//! - `queue` - Pending queue inspection and pause/resume
//! - `tts` - Text-to-speech and voice preview
//! - `history` - Recently synthesized texts
//! - `voices` - Voice listing endpoint

pub mod api;
pub mod events;
pub mod history;
pub mod queue;
pub mod speak;
pub mod tts;
pub mod voices;

pub use events::events_handler;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::errors::AppResult;

/// Decode a JSON request body whatever its `Content-Type` says.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    Ok(serde_json::from_slice(body)?)
}
