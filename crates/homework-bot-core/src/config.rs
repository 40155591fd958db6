//! Environment-based configuration.
//!
//! Three variables are required:
//! - `PRACTICUM_TOKEN` -- OAuth credential for the review status API
//! - `TELEGRAM_TOKEN` -- bot credential
//! - `TELEGRAM_CHAT_ID` -- recipient chat
//!
//! The rest have defaults and exist mostly so tests and staging can point the
//! bot somewhere else.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 60 * 10;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: Url,
    pub telegram_api: Url,
    /// Fixed delay between poll cycles.
    pub retry_period: Duration,
    /// Per-request timeout applied to both HTTP clients.
    pub http_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint.as_str())
            .field("telegram_api", &self.telegram_api.as_str())
            .field("retry_period", &self.retry_period)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values count as missing. Every missing required variable is
    /// reported at once rather than one per run.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing = missing_with(&get);
        if !missing.is_empty() {
            return Err(ConfigError::MissingVar(missing));
        }

        let required = |key: &'static str| get(key).ok_or(ConfigError::MissingVar(vec![key]));
        let practicum_token = required("PRACTICUM_TOKEN")?;
        let telegram_token = required("TELEGRAM_TOKEN")?;
        let telegram_chat_id = required("TELEGRAM_CHAT_ID")?;

        let endpoint = parse_url(
            "PRACTICUM_ENDPOINT",
            get("PRACTICUM_ENDPOINT").as_deref().unwrap_or(DEFAULT_ENDPOINT),
        )?;
        let telegram_api = parse_url(
            "TELEGRAM_API_URL",
            get("TELEGRAM_API_URL").as_deref().unwrap_or(DEFAULT_TELEGRAM_API),
        )?;

        let retry_period = parse_secs("RETRY_PERIOD_SECS", get("RETRY_PERIOD_SECS"), DEFAULT_RETRY_PERIOD_SECS)?;
        let http_timeout = parse_secs("HTTP_TIMEOUT_SECS", get("HTTP_TIMEOUT_SECS"), DEFAULT_HTTP_TIMEOUT_SECS)?;
        if http_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "HTTP_TIMEOUT_SECS",
                message: "timeout must be at least one second".to_string(),
            });
        }

        Ok(Config {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            telegram_api,
            retry_period,
            http_timeout,
        })
    }

    /// Names of required variables absent from the process environment.
    pub fn missing_vars() -> Vec<&'static str> {
        missing_with(&|key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty()))
    }
}

fn missing_with(get: &dyn Fn(&str) -> Option<String>) -> Vec<&'static str> {
    REQUIRED_VARS
        .iter()
        .copied()
        .filter(|&key| get(key).is_none())
        .collect()
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            key,
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

fn parse_secs(key: &'static str, raw: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    match raw {
        None => Ok(Duration::from_secs(default)),
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::InvalidValue {
                key,
                message: format!("'{v}' is not a number of seconds: {e}"),
            }),
    }
}
