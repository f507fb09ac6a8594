use super::utils::{env_parse, env_string};

/// Values read from the process environment (including `.env`, which
/// `main` loads before configuration).
#[derive(Debug, Default)]
pub(crate) struct EnvConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
    pub cors_allowed_origins: Option<String>,
    pub default_voice: Option<String>,
    pub espeak_path: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_model: Option<String>,
    pub elevenlabs_base_url: Option<String>,
    pub dispatch_interval_ms: Option<u64>,
    pub history_capacity: Option<usize>,
}

impl EnvConfig {
    pub(crate) fn load() -> Result<Self, String> {
        Ok(Self {
            host: env_string("HOST"),
            port: env_parse("PORT")?,
            static_dir: env_string("STATIC_DIR"),
            cors_allowed_origins: env_string("CORS_ALLOWED_ORIGINS"),
            default_voice: env_string("DEFAULT_VOICE"),
            espeak_path: env_string("ESPEAK_PATH"),
            // ELEVEN_API_KEY is the name used by existing deployments' .env files
            elevenlabs_api_key: env_string("ELEVEN_API_KEY")
                .or_else(|| env_string("ELEVENLABS_API_KEY")),
            elevenlabs_model: env_string("ELEVENLABS_MODEL"),
            elevenlabs_base_url: env_string("ELEVENLABS_BASE_URL"),
            dispatch_interval_ms: env_parse("DISPATCH_INTERVAL_MS")?,
            history_capacity: env_parse("HISTORY_CAPACITY")?,
        })
    }
}
