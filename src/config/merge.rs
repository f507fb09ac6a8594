use std::path::PathBuf;

use super::ServerConfig;
use super::env::EnvConfig;
use super::yaml::YamlConfig;

/// Build the final configuration: YAML over environment over defaults.
pub(crate) fn merge_config(
    yaml: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let env = EnvConfig::load()?;
    let yaml = yaml.unwrap_or_default();
    let server = yaml.server.unwrap_or_default();
    let tts = yaml.tts.unwrap_or_default();
    let broadcast = yaml.broadcast.unwrap_or_default();
    let history = yaml.history.unwrap_or_default();
    let security = yaml.security.unwrap_or_default();

    let mut config = ServerConfig::default();

    if let Some(host) = server.host.or(env.host) {
        config.host = host;
    }
    if let Some(port) = server.port.or(env.port) {
        config.port = port;
    }
    if let Some(dir) = server.static_dir.or(env.static_dir) {
        config.static_dir = PathBuf::from(dir);
    }
    config.cors_allowed_origins = security.cors_allowed_origins.or(env.cors_allowed_origins);

    if let Some(voice) = tts.default_voice.or(env.default_voice) {
        config.default_voice = voice;
    }
    if let Some(path) = tts.espeak_path.or(env.espeak_path) {
        config.espeak_path = path;
    }
    config.elevenlabs_api_key = tts.elevenlabs_api_key.or(env.elevenlabs_api_key);
    if let Some(model) = tts.elevenlabs_model.or(env.elevenlabs_model) {
        config.elevenlabs_model = model;
    }
    if let Some(url) = tts.elevenlabs_base_url.or(env.elevenlabs_base_url) {
        config.elevenlabs_base_url = url;
    }

    if let Some(interval) = broadcast.dispatch_interval_ms.or(env.dispatch_interval_ms) {
        config.dispatch_interval_ms = interval;
    }
    if let Some(capacity) = history.capacity.or(env.history_capacity) {
        config.history_capacity = capacity;
    }

    Ok(config)
}
