use thiserror::Error;

use crate::app_config::{
    CatalogConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load catalog configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_catalog_config() -> Result<CatalogConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_catalog_config_from_env()
}

/// Load catalog configuration from environment variables already in the process.
///
/// Unlike [`load_catalog_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_catalog_config_from_env() -> Result<CatalogConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Core parsing/validation, decoupled from the process environment so tests
/// can feed it a plain `HashMap`.
fn build_config<F>(lookup: F) -> Result<CatalogConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let base_url = or_default("SHOPQUICK_API_BASE_URL", DEFAULT_BASE_URL);
    let base_url = base_url.trim().trim_end_matches('/').to_string();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(invalid(
            "SHOPQUICK_API_BASE_URL",
            format!("expected an http(s) URL, got \"{base_url}\""),
        ));
    }

    let page_size = or_default("SHOPQUICK_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
        .parse::<u32>()
        .map_err(|e| invalid("SHOPQUICK_PAGE_SIZE", e.to_string()))?;
    if page_size == 0 {
        return Err(invalid("SHOPQUICK_PAGE_SIZE", "must be at least 1".into()));
    }

    let request_timeout_secs = or_default(
        "SHOPQUICK_REQUEST_TIMEOUT_SECS",
        &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
    )
    .parse::<u64>()
    .map_err(|e| invalid("SHOPQUICK_REQUEST_TIMEOUT_SECS", e.to_string()))?;

    let user_agent = or_default("SHOPQUICK_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("SHOPQUICK_LOG_LEVEL", "info");

    Ok(CatalogConfig {
        base_url,
        page_size,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
