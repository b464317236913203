use std::env::VarError;
use std::path::PathBuf;

use crate::{AppConfig, ConfigError};

const ENV_API_KEY: &str = "RAPIDAPI_KEY";
const ENV_OUTPUT_PATH: &str = "JOBSNAP_OUTPUT_PATH";
const ENV_SEARCHES_PATH: &str = "JOBSNAP_SEARCHES_PATH";
const ENV_LOG_LEVEL: &str = "JOBSNAP_LOG_LEVEL";
const ENV_REQUEST_TIMEOUT_SECS: &str = "JOBSNAP_REQUEST_TIMEOUT_SECS";
const ENV_INTER_QUERY_DELAY_MS: &str = "JOBSNAP_INTER_QUERY_DELAY_MS";

const DEFAULT_OUTPUT_PATH: &str = "public/jobs.json";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REQUEST_TIMEOUT_SECS: &str = "30";
const DEFAULT_INTER_QUERY_DELAY_MS: &str = "1000";

/// Loads configuration after sourcing a `.env` file if one is present.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] when `RAPIDAPI_KEY` is unset and
/// [`ConfigError::InvalidEnvVar`] when a numeric knob fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Loads configuration from the process environment without touching `.env`.
///
/// # Errors
///
/// Same failure modes as [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_owned()))
    };
    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default.to_owned())
    };
    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
            var: var.to_owned(),
            reason: format!("expected an unsigned integer, got {raw:?}"),
        })
    };

    let api_key = require(ENV_API_KEY)?;
    let output_path = PathBuf::from(or_default(ENV_OUTPUT_PATH, DEFAULT_OUTPUT_PATH));
    let searches_path = lookup(ENV_SEARCHES_PATH)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from);
    let log_level = or_default(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL);
    let request_timeout_secs = parse_u64(ENV_REQUEST_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS)?;
    let inter_query_delay_ms = parse_u64(ENV_INTER_QUERY_DELAY_MS, DEFAULT_INTER_QUERY_DELAY_MS)?;

    Ok(AppConfig {
        api_key,
        output_path,
        searches_path,
        log_level,
        request_timeout_secs,
        inter_query_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
