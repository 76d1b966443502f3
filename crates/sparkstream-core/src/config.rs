use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Production Gemini API root.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`
/// lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values are treated as unset so an empty `GEMINI_API_KEY=` line in
    // a `.env` file does not masquerade as a credential.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let env = parse_environment(&or_default("SPARKSTREAM_ENV", "development"))?;

    let raw_bind = or_default("SPARKSTREAM_BIND_ADDR", "127.0.0.1:3000");
    let bind_addr = raw_bind
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "SPARKSTREAM_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default("SPARKSTREAM_LOG_LEVEL", "info");

    let gemini_api_key = optional("GEMINI_API_KEY").or_else(|| optional("API_KEY"));
    let gemini_model = or_default("SPARKSTREAM_GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let gemini_base_url = or_default("SPARKSTREAM_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);

    let genai_timeout_secs = match optional("SPARKSTREAM_GENAI_TIMEOUT_SECS") {
        None => None,
        Some(raw) => match raw.parse::<u64>() {
            Ok(0) => {
                return Err(ConfigError::InvalidEnvVar {
                    var: "SPARKSTREAM_GENAI_TIMEOUT_SECS".to_string(),
                    reason: "must be greater than zero".to_string(),
                })
            }
            Ok(secs) => Some(secs),
            Err(e) => {
                return Err(ConfigError::InvalidEnvVar {
                    var: "SPARKSTREAM_GENAI_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })
            }
        },
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        genai_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SPARKSTREAM_ENV".to_string(),
            reason: format!("expected development, test, or production; got {other:?}"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
