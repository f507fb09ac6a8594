use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present in
/// the file override environment variables.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 3001
///   static_dir: "./static"
///
/// tts:
///   default_voice: "en-us"
///   espeak_path: "/usr/bin/espeak-ng"
///   elevenlabs_api_key: "your-elevenlabs-key"
///   elevenlabs_model: "eleven_multilingual_v2"
///
/// broadcast:
///   dispatch_interval_ms: 3000
///
/// history:
///   capacity: 10
///
/// security:
///   cors_allowed_origins: "*"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub tts: Option<TtsYaml>,
    pub broadcast: Option<BroadcastYaml>,
    pub history: Option<HistoryYaml>,
    pub security: Option<SecurityYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Directory served for every path not matched by the API
    pub static_dir: Option<String>,
}

/// Speech synthesis configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TtsYaml {
    /// Voice used when a request does not name one
    pub default_voice: Option<String>,
    /// Path or name of the espeak-ng binary
    pub espeak_path: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_model: Option<String>,
    /// Override of the ElevenLabs API host (scheme + host)
    pub elevenlabs_base_url: Option<String>,
}

/// Broadcast hub configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BroadcastYaml {
    /// Pause between queued events replayed after a resume
    pub dispatch_interval_ms: Option<u64>,
}

/// Request history configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HistoryYaml {
    pub capacity: Option<usize>,
}

/// Security configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    /// CORS allowed origins (comma-separated list or "*" for all)
    pub cors_allowed_origins: Option<String>,
}

impl YamlConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the YAML is malformed.
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}
