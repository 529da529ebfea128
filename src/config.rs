//! Credential and endpoint resolution

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing OpenWeatherMap API key (pass --api-key or set OPENWEATHER_API_KEY)")]
    MissingApiKey,
    #[error("invalid base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
}

/// Resolved settings for the weather client
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// None leaves the transport's own behaviour in place
    pub timeout: Option<Duration>,
}

impl Config {
    /// Resolve from CLI values, falling back to the process environment.
    pub fn resolve(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with(api_key, base_url, timeout_secs, |name| {
            std::env::var(name).ok()
        })
    }

    /// Flag values win over `env`; blank values count as absent.
    pub fn resolve_with(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = non_blank(api_key)
            .or_else(|| non_blank(env(API_KEY_ENV)))
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = non_blank(base_url)
            .or_else(|| non_blank(env(BASE_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            api_key,
            base_url,
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
