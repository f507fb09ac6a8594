use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for speech synthesis operations
pub type TTSResult<T> = Result<T, TTSError>;

/// Errors raised by speech synthesis backends
#[derive(Error, Debug)]
pub enum TTSError {
    /// Backend is misconfigured (bad voice id, unusable base URL, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Remote provider needs an API key that is not configured
    #[error("{0} API key not configured in server environment")]
    MissingApiKey(&'static str),

    /// The synthesis process could not be started or exited abnormally
    #[error("Audio generation failed: {0}")]
    AudioGenerationFailed(String),

    /// Remote provider answered with a non-success status
    #[error("Provider error ({status}): {message}")]
    ProviderError { status: u16, message: String },

    /// Transport-level failure talking to a remote provider
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Synthesized audio together with its MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub data: Bytes,
    pub content_type: &'static str,
}

impl AudioClip {
    pub fn new(data: impl Into<Bytes>, content_type: &'static str) -> Self {
        Self {
            data: data.into(),
            content_type,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A selectable voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Value to pass back as `voice` when synthesizing
    pub id: String,
    /// Display name of the voice
    pub name: String,
    /// Language code, e.g. "en-us"
    pub language: String,
    /// Gender as reported by the backend ("Male", "Female" or "Unknown")
    pub gender: String,
}

/// Text-to-speech backend
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Turn `text` into audio using `voice`
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<AudioClip>;

    /// Voices this backend can speak with
    async fn list_voices(&self) -> TTSResult<Vec<Voice>>;

    /// Short provider name used in logs
    fn name(&self) -> &'static str;
}
