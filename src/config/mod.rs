//! Configuration module for the speak relay server
//!
//! Server configuration comes from `.env` files, YAML files, and environment
//! variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//! - `utils`: Utility functions for configuration parsing
//!
//! # Example
//! ```rust,no_run
//! use speak_relay::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

mod env;
mod merge;
mod utils;
mod validation;
mod yaml;

use crate::core::broadcast::DEFAULT_DISPATCH_INTERVAL;
use crate::core::history::DEFAULT_HISTORY_CAPACITY;
use crate::core::tts::elevenlabs::{DEFAULT_ELEVENLABS_BASE_URL, DEFAULT_ELEVENLABS_MODEL};
use crate::core::tts::espeak::DEFAULT_ESPEAK_BINARY;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3001;

/// Voice used when a request does not name one
pub const DEFAULT_VOICE: &str = "en-us";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,
    /// Directory served for every path the API does not handle
    pub static_dir: PathBuf,

    // Security settings
    /// CORS allowed origins (comma-separated list or "*" for all).
    /// `None` leaves CORS headers off.
    pub cors_allowed_origins: Option<String>,

    // Speech synthesis
    pub default_voice: String,
    pub espeak_path: String,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_model: String,
    pub elevenlabs_base_url: String,

    // Broadcast hub
    /// Pause between replayed queue entries after a resume, in milliseconds
    pub dispatch_interval_ms: u64,

    // Request history
    pub history_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            cors_allowed_origins: None,
            default_voice: DEFAULT_VOICE.to_string(),
            espeak_path: DEFAULT_ESPEAK_BINARY.to_string(),
            elevenlabs_api_key: None,
            elevenlabs_model: DEFAULT_ELEVENLABS_MODEL.to_string(),
            elevenlabs_base_url: DEFAULT_ELEVENLABS_BASE_URL.to_string(),
            dispatch_interval_ms: DEFAULT_DISPATCH_INTERVAL.as_millis() as u64,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Zeroize the provider key when the configuration is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.elevenlabs_api_key {
            key.zeroize();
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and defaults
    ///
    /// # Errors
    /// Returns an error if a numeric variable cannot be parsed or the
    /// resulting configuration fails validation.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = merge::merge_config(None)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Environment variables (with `.env` already loaded by `main`) provide
    /// the base; values present in the YAML file override them.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn dispatch_interval(&self) -> Duration {
        Duration::from_millis(self.dispatch_interval_ms)
    }

    pub fn has_elevenlabs(&self) -> bool {
        self.elevenlabs_api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    const ENV_VARS: &[&str] = &[
        "HOST",
        "PORT",
        "STATIC_DIR",
        "CORS_ALLOWED_ORIGINS",
        "DEFAULT_VOICE",
        "ESPEAK_PATH",
        "ELEVEN_API_KEY",
        "ELEVENLABS_API_KEY",
        "ELEVENLABS_MODEL",
        "ELEVENLABS_BASE_URL",
        "DISPATCH_INTERVAL_MS",
        "HISTORY_CAPACITY",
    ];

    fn cleanup_env_vars() {
        unsafe {
            for name in ENV_VARS {
                env::remove_var(name);
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "0.0.0.0:3001");
        assert_eq!(config.default_voice, "en-us");
        assert_eq!(config.dispatch_interval(), Duration::from_secs(3));
        assert_eq!(config.history_capacity, 10);
        assert!(!config.has_elevenlabs());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        cleanup_env_vars();

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.espeak_path, "espeak-ng");
        assert_eq!(config.elevenlabs_base_url, "https://api.elevenlabs.io");
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_values() {
        cleanup_env_vars();
        unsafe {
            env::set_var("PORT", "4100");
            env::set_var("DEFAULT_VOICE", "fr");
            env::set_var("DISPATCH_INTERVAL_MS", "250");
            env::set_var("ELEVENLABS_API_KEY", "fallback-key");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 4100);
        assert_eq!(config.default_voice, "fr");
        assert_eq!(config.dispatch_interval(), Duration::from_millis(250));
        assert_eq!(config.elevenlabs_api_key.as_deref(), Some("fallback-key"));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_eleven_api_key_takes_precedence() {
        cleanup_env_vars();
        unsafe {
            env::set_var("ELEVEN_API_KEY", "primary");
            env::set_var("ELEVENLABS_API_KEY", "secondary");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.elevenlabs_api_key.as_deref(), Some("primary"));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_number() {
        cleanup_env_vars();
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_zero_interval() {
        cleanup_env_vars();
        unsafe {
            env::set_var("DISPATCH_INTERVAL_MS", "0");
        }

        assert!(ServerConfig::from_env().is_err());

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_file_yaml_overrides_env() {
        cleanup_env_vars();
        unsafe {
            env::set_var("HOST", "10.0.0.1");
            env::set_var("PORT", "5000");
            env::set_var("HISTORY_CAPACITY", "4");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(
            &config_path,
            r#"
server:
  port: 8080
  static_dir: "/srv/relay"
tts:
  elevenlabs_api_key: "yaml-el-key"
"#,
        )
        .unwrap();

        let config = ServerConfig::from_file(&config_path).unwrap();
        assert_eq!(config.host, "10.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/relay"));
        assert_eq!(config.history_capacity, 4);
        assert_eq!(config.elevenlabs_api_key.as_deref(), Some("yaml-el-key"));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_file_missing_file() {
        cleanup_env_vars();

        let result = ServerConfig::from_file(&PathBuf::from("/nonexistent/config.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }

    #[test]
    #[serial]
    fn test_from_file_invalid_values() {
        cleanup_env_vars();

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(
            &config_path,
            "tts:\n  elevenlabs_base_url: \"ftp://example.com\"\n",
        )
        .unwrap();

        let err = ServerConfig::from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("ELEVENLABS_BASE_URL"));
    }
}
