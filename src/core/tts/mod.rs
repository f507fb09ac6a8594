//! Speech synthesis backends
//!
//! - `espeak` - local eSpeak NG subprocess
//! - `elevenlabs` - ElevenLabs HTTP API
//! - `router` - picks a backend from the requested voice

mod base;
pub mod elevenlabs;
pub mod espeak;
mod router;

pub use base::{AudioClip, SpeechSynthesizer, TTSError, TTSResult, Voice};
pub use elevenlabs::{ElevenLabsConfig, ElevenLabsSynthesizer};
pub use espeak::EspeakSynthesizer;
pub use router::VoiceRouter;

use std::sync::Arc;

use crate::config::ServerConfig;

/// Build the voice router described by the server configuration.
pub fn create_synthesizer(config: &ServerConfig) -> TTSResult<VoiceRouter> {
    let elevenlabs = ElevenLabsSynthesizer::new(ElevenLabsConfig {
        api_key: config.elevenlabs_api_key.clone(),
        model_id: config.elevenlabs_model.clone(),
        base_url: config.elevenlabs_base_url.clone(),
        voice_settings: Default::default(),
    })?;
    let espeak = EspeakSynthesizer::new(config.espeak_path.clone());

    Ok(VoiceRouter::new(
        Arc::new(espeak),
        Arc::new(elevenlabs),
        config.default_voice.clone(),
    ))
}
