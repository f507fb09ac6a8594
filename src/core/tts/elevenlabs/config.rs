use serde::Serialize;

use crate::core::tts::base::Voice;

/// Public ElevenLabs API host
pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";

/// Model used when none is configured
pub const DEFAULT_ELEVENLABS_MODEL: &str = "eleven_multilingual_v2";

/// Voice prefix routing a request to ElevenLabs
pub const ELEVENLABS_VOICE_PREFIX: &str = "eleven:";

/// Premade voices offered in the voice picker, `(voice_id, name)`
const BUILTIN_VOICES: &[(&str, &str)] = &[
    ("pNInz6obpgDQGcFmaJgB", "Adam"),
    ("EXAVITQu4vr4xnSDxMaL", "Bella"),
    ("ErXwobaYiN019PkySvjV", "Antoni"),
    ("21m00Tcm4TlvDq8ikWAM", "Rachel"),
    ("AZnzlk1XvdvUeBnXmlld", "Domi"),
];

/// Voice tuning sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

/// Connection settings for the ElevenLabs API
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    pub api_key: Option<String>,
    pub model_id: String,
    /// Scheme and host, without a trailing slash
    pub base_url: String,
    pub voice_settings: VoiceSettings,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_id: DEFAULT_ELEVENLABS_MODEL.to_string(),
            base_url: DEFAULT_ELEVENLABS_BASE_URL.to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }
}

impl Drop for ElevenLabsConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.api_key {
            key.zeroize();
        }
    }
}

/// The premade voices as picker entries, ids carrying the routing prefix.
pub fn builtin_voices() -> Vec<Voice> {
    BUILTIN_VOICES
        .iter()
        .map(|(id, name)| Voice {
            id: format!("{ELEVENLABS_VOICE_PREFIX}{id}"),
            name: (*name).to_string(),
            language: "multilingual".to_string(),
            gender: match *name {
                "Bella" | "Rachel" | "Domi" => "Female",
                _ => "Male",
            }
            .to_string(),
        })
        .collect()
}
