//! Speech API Tests
//!
//! `/api/tts`, `/api/preview`, `/api/voices` and `/api/history` against
//! in-process synthesizers.

mod mock_synthesizers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use mock_synthesizers::{
    BrokenSynthesizer, EchoSynthesizer, body_bytes, body_json, echo_state, get, post_json,
    test_config,
};
use speak_relay::{VoiceRouter, routes::create_app, state::AppState};

#[tokio::test]
async fn test_tts_uses_default_voice_and_records_history() {
    let state = echo_state(test_config());
    let app = create_app(state.clone());

    let response = post_json(&app, "/api/tts", json!({ "text": "hello", "voice": "" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "audio/wav");
    assert_eq!(body_bytes(response).await, b"local:en-us:hello");

    let response = get(&app, "/api/history").await;
    assert_eq!(body_json(response).await, json!(["hello"]));
}

#[tokio::test]
async fn test_tts_routes_eleven_voices_to_remote() {
    let app = create_app(echo_state(test_config()));

    let response = post_json(
        &app,
        "/api/tts",
        json!({ "text": "hi", "voice": "eleven:pNInz6obpgDQGcFmaJgB" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_bytes(response).await,
        b"remote:eleven:pNInz6obpgDQGcFmaJgB:hi"
    );
}

#[tokio::test]
async fn test_tts_rejects_empty_text() {
    let state = echo_state(test_config());
    let app = create_app(state.clone());

    let response = post_json(&app, "/api/tts", json!({ "text": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.history.is_empty());
}

#[tokio::test]
async fn test_tts_failure_is_server_error() {
    let state = AppState::with_synthesizer(test_config(), Arc::new(BrokenSynthesizer));
    let app = create_app(state.clone());

    let response = post_json(&app, "/api/tts", json!({ "text": "hello" })).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("backend offline"));
    assert!(state.history.is_empty());
}

#[tokio::test]
async fn test_history_is_capped() {
    let mut config = test_config();
    config.history_capacity = 2;
    let app = create_app(echo_state(config));

    for text in ["a", "b", "c"] {
        let response = post_json(&app, "/api/tts", json!({ "text": text })).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(&app, "/api/history").await;
    assert_eq!(body_json(response).await, json!(["b", "c"]));
}

#[tokio::test]
async fn test_history_starts_empty() {
    let app = create_app(echo_state(test_config()));
    let response = get(&app, "/api/history").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_preview_speaks_fixed_sentence() {
    let app = create_app(echo_state(test_config()));

    let response = get(&app, "/api/preview?voice=de").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_bytes(response).await,
        b"local:de:Hi! I am going to sound like this"
    );

    let response = get(&app, "/api/preview").await;
    assert_eq!(
        body_bytes(response).await,
        b"local:en-us:Hi! I am going to sound like this"
    );
}

#[tokio::test]
async fn test_voices_lists_remote_first() {
    let app = create_app(echo_state(test_config()));

    let response = get(&app, "/api/voices").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["remote-voice", "local-voice"]);
    assert_eq!(body[0]["gender"], "Unknown");
}

#[tokio::test]
async fn test_voices_skip_failing_backend() {
    let router = VoiceRouter::new(
        Arc::new(EchoSynthesizer::new("local")),
        Arc::new(BrokenSynthesizer),
        "en-us",
    );
    let app = create_app(AppState::with_synthesizer(test_config(), Arc::new(router)));

    let response = get(&app, "/api/voices").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_voices_fail_when_every_backend_fails() {
    let app = create_app(AppState::with_synthesizer(
        test_config(),
        Arc::new(BrokenSynthesizer),
    ));

    let response = get(&app, "/api/voices").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
