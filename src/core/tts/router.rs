use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::base::{AudioClip, SpeechSynthesizer, TTSError, TTSResult, Voice};
use super::elevenlabs::ELEVENLABS_VOICE_PREFIX;

/// Picks a backend per request from the voice name.
///
/// `eleven:<id>` goes to the remote backend, everything else to the local
/// one. An empty voice falls back to `default_voice`.
pub struct VoiceRouter {
    local: Arc<dyn SpeechSynthesizer>,
    remote: Arc<dyn SpeechSynthesizer>,
    default_voice: String,
}

impl VoiceRouter {
    pub fn new(
        local: Arc<dyn SpeechSynthesizer>,
        remote: Arc<dyn SpeechSynthesizer>,
        default_voice: impl Into<String>,
    ) -> Self {
        Self {
            local,
            remote,
            default_voice: default_voice.into(),
        }
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    /// Resolve an optional request voice to the voice actually used.
    pub fn resolve_voice<'a>(&'a self, voice: &'a str) -> &'a str {
        let voice = voice.trim();
        if voice.is_empty() {
            &self.default_voice
        } else {
            voice
        }
    }

    fn backend_for(&self, voice: &str) -> &Arc<dyn SpeechSynthesizer> {
        if voice.starts_with(ELEVENLABS_VOICE_PREFIX) {
            &self.remote
        } else {
            &self.local
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for VoiceRouter {
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<AudioClip> {
        let voice = self.resolve_voice(voice);
        self.backend_for(voice).synthesize(text, voice).await
    }

    /// Remote voices first, then local ones. A failing backend is skipped;
    /// the call only fails when every backend fails.
    async fn list_voices(&self) -> TTSResult<Vec<Voice>> {
        let mut voices = Vec::new();
        let mut last_error: Option<TTSError> = None;

        for backend in [&self.remote, &self.local] {
            match backend.list_voices().await {
                Ok(mut listed) => voices.append(&mut listed),
                Err(e) => {
                    warn!(backend = backend.name(), "Failed to list voices: {}", e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if voices.is_empty() => Err(e),
            _ => Ok(voices),
        }
    }

    fn name(&self) -> &'static str {
        "router"
    }
}
