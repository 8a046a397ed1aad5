use crate::error::config::ConfigError;

/// Parses a Discord snowflake id from an environment variable value
///
/// # Arguments
/// - `name` - Name of the environment variable, used in the error
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(ConfigError::InvalidEnvVar)` - Failed to parse the string as a u64
pub fn parse_snowflake(name: &str, value: String) -> Result<u64, ConfigError> {
    let result = value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value: value.clone(),
        })?;

    Ok(result)
}

/// Parses a boolean flag from an environment variable value
///
/// Accepts `true`/`false`, `1`/`0` and `yes`/`no`, case-insensitively.
pub fn parse_flag(name: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "expected true or false".to_string(),
        }),
    }
}
