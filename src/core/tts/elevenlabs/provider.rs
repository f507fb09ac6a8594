use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::config::{ELEVENLABS_VOICE_PREFIX, ElevenLabsConfig, builtin_voices};
use crate::core::tts::base::{AudioClip, SpeechSynthesizer, TTSError, TTSResult, Voice};

const MPEG_MIME_TYPE: &str = "audio/mpeg";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// ElevenLabs text-to-speech over HTTPS
#[derive(Debug, Clone)]
pub struct ElevenLabsSynthesizer {
    client: reqwest::Client,
    config: ElevenLabsConfig,
}

impl ElevenLabsSynthesizer {
    pub fn new(config: ElevenLabsConfig) -> TTSResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ElevenLabsConfig {
        &self.config
    }

    fn speech_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            voice_id
        )
    }
}

/// Strip the routing prefix and check the remaining ElevenLabs voice id.
fn voice_id(voice: &str) -> TTSResult<&str> {
    let id = voice.strip_prefix(ELEVENLABS_VOICE_PREFIX).unwrap_or(voice);
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TTSError::InvalidConfiguration(format!(
            "Invalid ElevenLabs voice id: {id:?}"
        )));
    }
    Ok(id)
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<AudioClip> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(TTSError::MissingApiKey("ElevenLabs"))?;
        let voice_id = voice_id(voice)?;

        let body = json!({
            "text": text,
            "model_id": self.config.model_id,
            "voice_settings": self.config.voice_settings,
        });

        let response = self
            .client
            .post(self.speech_url(voice_id))
            .header("xi-api-key", api_key)
            .header("Accept", MPEG_MIME_TYPE)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TTSError::ProviderError {
                status: status.as_u16(),
                message,
            });
        }

        let audio = response.bytes().await?;
        debug!(voice_id, bytes = audio.len(), "ElevenLabs synthesis complete");
        Ok(AudioClip::new(audio, MPEG_MIME_TYPE))
    }

    async fn list_voices(&self) -> TTSResult<Vec<Voice>> {
        if self.config.api_key.is_none() {
            return Ok(Vec::new());
        }
        Ok(builtin_voices())
    }

    fn name(&self) -> &'static str {
        "elevenlabs"
    }
}
