//! In-process synthesizers and request helpers for router-level tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use speak_relay::{
    AudioClip, ServerConfig, SpeechSynthesizer, TTSError, TTSResult, Voice, VoiceRouter,
    state::AppState,
};

/// Echoes `<tag>:<voice>:<text>` back as the audio payload.
pub struct EchoSynthesizer {
    pub tag: &'static str,
    pub voices: Vec<Voice>,
}

impl EchoSynthesizer {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            voices: vec![Voice {
                id: format!("{tag}-voice"),
                name: format!("{tag} voice"),
                language: "en".to_string(),
                gender: "Unknown".to_string(),
            }],
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for EchoSynthesizer {
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<AudioClip> {
        Ok(AudioClip::new(
            format!("{}:{}:{}", self.tag, voice, text).into_bytes(),
            "audio/wav",
        ))
    }

    async fn list_voices(&self) -> TTSResult<Vec<Voice>> {
        Ok(self.voices.clone())
    }

    fn name(&self) -> &'static str {
        self.tag
    }
}

/// Fails every call.
pub struct BrokenSynthesizer;

#[async_trait]
impl SpeechSynthesizer for BrokenSynthesizer {
    async fn synthesize(&self, _text: &str, _voice: &str) -> TTSResult<AudioClip> {
        Err(TTSError::AudioGenerationFailed("backend offline".to_string()))
    }

    async fn list_voices(&self) -> TTSResult<Vec<Voice>> {
        Err(TTSError::AudioGenerationFailed("backend offline".to_string()))
    }

    fn name(&self) -> &'static str {
        "broken"
    }
}

/// Configuration with a short dispatch interval and no external services.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.host = "127.0.0.1".to_string();
    config.dispatch_interval_ms = 10;
    config
}

/// State routing `eleven:` voices to a "remote" echo and the rest to "local".
pub fn echo_state(config: ServerConfig) -> Arc<AppState> {
    let router = VoiceRouter::new(
        Arc::new(EchoSynthesizer::new("local")),
        Arc::new(EchoSynthesizer::new("remote")),
        config.default_voice.clone(),
    );
    AppState::with_synthesizer(config, Arc::new(router))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// POST without a `Content-Type` header, as `curl -d` sends it.
pub async fn post_untyped(app: &Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn speak(app: &Router, text: &str) -> StatusCode {
    post_json(app, "/api/speak", serde_json::json!({ "text": text }))
        .await
        .status()
}

pub async fn queue(app: &Router) -> Vec<String> {
    serde_json::from_value(body_json(get(app, "/api/queue").await).await).unwrap()
}

/// Next data frame of an event stream as text, or `None` once it ends.
pub async fn next_frame(body: &mut Body) -> Option<String> {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(2), body.frame())
            .await
            .expect("timed out waiting for an event frame")?
            .unwrap();
        if let Ok(data) = frame.into_data() {
            return Some(String::from_utf8(data.to_vec()).unwrap());
        }
    }
}
