//! Roster API endpoint configuration.
//!
//! # Responsibility
//! - Resolve the API base URL from explicit input, environment, or default.
//! - Resolve the optional request timeout from the environment.
//! - Reject base URLs the HTTP client cannot template endpoints onto.
//!
//! # Invariants
//! - Resolution order is explicit value > `ROSTER_API_BASE_URL` > default.
//! - A resolved base URL is `http`/`https` and its path has no trailing slash
//!   (a bare host keeps the root `/`).
//! - No request timeout is applied unless `ROSTER_API_TIMEOUT_MS` holds a
//!   positive millisecond count; a blank value counts as unset.

use reqwest::Url;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Public demo deployment of the roster API.
pub const DEFAULT_API_BASE_URL: &str = "https://dummy.restapiexample.com/api/v1";
/// Environment variable that overrides [`DEFAULT_API_BASE_URL`].
pub const API_BASE_URL_ENV: &str = "ROSTER_API_BASE_URL";
/// Environment variable holding an optional request timeout in milliseconds.
pub const API_TIMEOUT_ENV: &str = "ROSTER_API_TIMEOUT_MS";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBaseUrl,
    InvalidBaseUrl { value: String, reason: String },
    UnsupportedScheme(String),
    InvalidTimeout(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBaseUrl => write!(f, "api base url cannot be empty"),
            Self::InvalidBaseUrl { value, reason } => {
                write!(f, "api base url `{value}` is invalid: {reason}")
            }
            Self::UnsupportedScheme(scheme) => {
                write!(f, "api base url scheme `{scheme}` is unsupported; expected http|https")
            }
            Self::InvalidTimeout(value) => write!(
                f,
                "api timeout `{value}` is invalid; expected a positive number of milliseconds"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Connection settings for [`crate::api::HttpEmployeeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
    /// `None` means requests wait until the server answers or the socket fails.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Builds a config from one raw base URL.
    pub fn new(base_url: &str) -> ConfigResult<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout: None,
        })
    }

    /// Resolves a config using explicit input, then env, then default.
    ///
    /// Blank explicit or env values are treated as absent. The timeout is
    /// read from [`API_TIMEOUT_ENV`].
    pub fn resolve(explicit: Option<&str>) -> ConfigResult<Self> {
        let from_env = std::env::var(API_BASE_URL_ENV).ok();
        let config = Self::resolve_from(explicit, from_env.as_deref())?;
        let timeout_env = std::env::var(API_TIMEOUT_ENV).ok();
        match parse_timeout_ms(timeout_env.as_deref())? {
            Some(timeout) => Ok(config.with_timeout(timeout)),
            None => Ok(config),
        }
    }

    /// Same as [`ApiConfig::resolve`] with the env lookup injected.
    pub fn resolve_from(explicit: Option<&str>, from_env: Option<&str>) -> ConfigResult<Self> {
        let raw = [explicit, from_env]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self::new(raw)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Parses an optional millisecond timeout; blank means no timeout.
pub fn parse_timeout_ms(raw: Option<&str>) -> ConfigResult<Option<Duration>> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<u64>() {
        Ok(millis) if millis > 0 => Ok(Some(Duration::from_millis(millis))),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

/// Parses and normalizes one base URL.
pub fn normalize_base_url(raw: &str) -> ConfigResult<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }

    let url = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
        value: trimmed.to_string(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            reason: "url cannot carry path segments".to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_base_url, parse_timeout_ms, ApiConfig, ConfigError, DEFAULT_API_BASE_URL,
    };
    use std::time::Duration;

    #[test]
    fn explicit_value_wins_over_env_and_default() {
        let config =
            ApiConfig::resolve_from(Some("http://localhost:9000/api"), Some("http://env.test"))
                .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:9000/api");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn blank_explicit_falls_back_to_env_then_default() {
        let from_env = ApiConfig::resolve_from(Some("  "), Some("http://env.test/v1/")).unwrap();
        assert_eq!(from_env.base_url.as_str(), "http://env.test/v1");

        let fallback = ApiConfig::resolve_from(None, Some("")).unwrap();
        assert_eq!(fallback.base_url.as_str(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn normalize_rejects_empty_and_foreign_schemes() {
        assert_eq!(normalize_base_url(" / "), Err(ConfigError::EmptyBaseUrl));
        assert_eq!(
            normalize_base_url("ftp://files.test"),
            Err(ConfigError::UnsupportedScheme("ftp".to_string()))
        );
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn timeout_parses_positive_millis_and_ignores_blank() {
        assert_eq!(parse_timeout_ms(None), Ok(None));
        assert_eq!(parse_timeout_ms(Some("  ")), Ok(None));
        assert_eq!(
            parse_timeout_ms(Some(" 2500 ")),
            Ok(Some(Duration::from_millis(2500)))
        );
    }

    #[test]
    fn timeout_rejects_zero_and_non_numeric_values() {
        assert_eq!(
            parse_timeout_ms(Some("0")),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
        assert_eq!(
            parse_timeout_ms(Some("5s")),
            Err(ConfigError::InvalidTimeout("5s".to_string()))
        );
    }

    #[test]
    fn with_timeout_sets_request_timeout() {
        let config = ApiConfig::new("http://localhost:9000")
            .unwrap()
            .with_timeout(Duration::from_millis(50));
        assert_eq!(config.timeout, Some(Duration::from_millis(50)));
    }
}
