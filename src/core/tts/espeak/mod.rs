//! eSpeak NG speech backend.
//!
//! Runs the local `espeak-ng` binary once per request and returns its WAV
//! output. Voice names are the language/variant identifiers printed by
//! `espeak-ng --voices` (e.g. `en-us`, `de`, `en+f3`).

mod provider;
mod voices;

pub use provider::{DEFAULT_ESPEAK_BINARY, EspeakSynthesizer};
pub use voices::parse_voice_table;
