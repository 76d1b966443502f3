use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SPARKSTREAM_ENV"));
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.gemini_api_key.is_none());
    assert_eq!(cfg.gemini_model, "gemini-2.5-flash");
    assert_eq!(
        cfg.gemini_base_url,
        "https://generativelanguage.googleapis.com/"
    );
    assert!(cfg.genai_timeout_secs.is_none());
}

#[test]
fn defaults_come_from_exported_constants() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("empty env is valid");
    assert_eq!(cfg.gemini_model, DEFAULT_GEMINI_MODEL);
    assert_eq!(cfg.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
}


#[test]
fn build_app_config_reads_gemini_api_key() {
    let mut map = HashMap::new();
    map.insert("GEMINI_API_KEY", "AIza-test");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_api_key.as_deref(), Some("AIza-test"));
}

#[test]
fn build_app_config_falls_back_to_api_key() {
    let mut map = HashMap::new();
    map.insert("API_KEY", "AIza-fallback");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_api_key.as_deref(), Some("AIza-fallback"));
}

#[test]
fn build_app_config_prefers_gemini_api_key_over_api_key() {
    let mut map = HashMap::new();
    map.insert("GEMINI_API_KEY", "primary");
    map.insert("API_KEY", "fallback");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_api_key.as_deref(), Some("primary"));
}

#[test]
fn build_app_config_blank_api_key_is_none() {
    let mut map = HashMap::new();
    map.insert("GEMINI_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.gemini_api_key.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("SPARKSTREAM_BIND_ADDR", "not-a-socket-addr");
    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    let ConfigError::InvalidEnvVar { var, .. } = err;
    assert_eq!(var, "SPARKSTREAM_BIND_ADDR");
}

#[test]
fn build_app_config_model_override() {
    let mut map = HashMap::new();
    map.insert("SPARKSTREAM_GEMINI_MODEL", "gemini-2.5-pro");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_model, "gemini-2.5-pro");
}

#[test]
fn build_app_config_timeout_override() {
    let mut map = HashMap::new();
    map.insert("SPARKSTREAM_GENAI_TIMEOUT_SECS", "45");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.genai_timeout_secs, Some(45));
}

#[test]
fn build_app_config_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("SPARKSTREAM_GENAI_TIMEOUT_SECS", "soon");
    // Every config failure is an invalid value; unset variables fall back to defaults.
    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    let ConfigError::InvalidEnvVar { var, .. } = err;
    assert_eq!(var, "SPARKSTREAM_GENAI_TIMEOUT_SECS");
}

#[test]
fn build_app_config_timeout_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("SPARKSTREAM_GENAI_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn app_config_debug_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("GEMINI_API_KEY", "super-secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret-key"));
    assert!(rendered.contains("[redacted]"));
}
