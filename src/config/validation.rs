use super::ServerConfig;

/// Reject configurations the server cannot run with.
pub(crate) fn validate(config: &ServerConfig) -> Result<(), String> {
    validate_port(config.port)?;
    validate_dispatch_interval(config.dispatch_interval_ms)?;
    validate_history_capacity(config.history_capacity)?;
    validate_base_url(&config.elevenlabs_base_url)?;
    Ok(())
}

pub(crate) fn validate_port(port: u16) -> Result<(), String> {
    if port == 0 {
        return Err("PORT must be between 1 and 65535".to_string());
    }
    Ok(())
}

pub(crate) fn validate_dispatch_interval(interval_ms: u64) -> Result<(), String> {
    if interval_ms == 0 {
        return Err("DISPATCH_INTERVAL_MS must be greater than zero".to_string());
    }
    Ok(())
}

pub(crate) fn validate_history_capacity(capacity: usize) -> Result<(), String> {
    if capacity == 0 {
        return Err("HISTORY_CAPACITY must be greater than zero".to_string());
    }
    Ok(())
}

pub(crate) fn validate_base_url(raw: &str) -> Result<(), String> {
    let parsed =
        url::Url::parse(raw).map_err(|e| format!("Invalid ELEVENLABS_BASE_URL '{raw}': {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!(
            "ELEVENLABS_BASE_URL must use http or https, got '{scheme}'"
        )),
    }
}
