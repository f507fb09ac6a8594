use std::str::FromStr;

/// Read an environment variable, treating blank values as unset.
pub(crate) fn env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read and parse an environment variable.
///
/// Unset or blank variables yield `Ok(None)`; unparsable values are an error
/// naming the variable.
pub(crate) fn env_parse<T>(name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_string(name)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| format!("Invalid value for {name} ({raw:?}): {e}"))
        })
        .transpose()
}
