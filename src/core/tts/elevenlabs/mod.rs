//! ElevenLabs speech backend.
//!
//! Selected for voices of the form `eleven:<voice_id>`. Audio is returned as
//! MP3 from `POST /v1/text-to-speech/{voice_id}`.

mod config;
mod provider;

pub use config::{
    DEFAULT_ELEVENLABS_BASE_URL, DEFAULT_ELEVENLABS_MODEL, ELEVENLABS_VOICE_PREFIX,
    ElevenLabsConfig, VoiceSettings, builtin_voices,
};
pub use provider::ElevenLabsSynthesizer;
