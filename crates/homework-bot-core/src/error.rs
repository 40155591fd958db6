//! Core error types for homework-bot-core.
//!
//! Every failure a poll cycle can hit is a variant of [`ReviewError`]. The
//! orchestrator switches on [`ReviewError::severity`] to decide whether the
//! recipient hears about it; nothing is dispatched on error text.

use thiserror::Error;

/// Whether a failure is worth a message to the recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Logged only.
    Quiet,
    /// Logged and delivered as an alert (deduplicated by text).
    Alert,
}

/// Errors raised while fetching, validating, interpreting or delivering.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// Status API answered with something other than HTTP 200.
    #[error(
        "API at {endpoint} is unavailable: headers: {headers}, params: {params}, \
         status_code: {status}, text: {body}"
    )]
    ApiUnavailable {
        endpoint: String,
        headers: String,
        params: String,
        status: u16,
        body: String,
    },

    /// Connection, TLS or timeout failure talking to the status API.
    #[error(
        "failed to connect to API at {endpoint}: headers: {headers}, params: {params}, {source}"
    )]
    ConnectionFailure {
        endpoint: String,
        headers: String,
        params: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP 200 but the body is not JSON.
    #[error("API response is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// A value has the wrong shape (payload not an object, `homeworks` not a list...).
    #[error("{0}")]
    TypeMismatch(String),

    /// A required key is absent.
    #[error("missing key \"{field}\", available keys: {keys:?}")]
    MissingField { field: &'static str, keys: Vec<String> },

    /// Status code outside the verdict table.
    #[error("unknown homework status \"{status}\", known statuses: {known:?}")]
    UnknownVerdict {
        status: String,
        known: Vec<&'static str>,
    },

    /// The messaging API refused or never received the message.
    #[error("failed to deliver message: {0}")]
    DeliveryFailure(String),
}

impl ReviewError {
    pub fn severity(&self) -> Severity {
        match self {
            ReviewError::MissingField { .. } => Severity::Quiet,
            // Reported by the caller directly; alerting about it would loop.
            ReviewError::DeliveryFailure(_) => Severity::Quiet,
            ReviewError::ApiUnavailable { .. }
            | ReviewError::ConnectionFailure { .. }
            | ReviewError::MalformedBody(_)
            | ReviewError::TypeMismatch(_)
            | ReviewError::UnknownVerdict { .. } => Severity::Alert,
        }
    }

    /// Shorthand for a [`ReviewError::MissingField`] built from an object's keys.
    pub fn missing(field: &'static str, object: &serde_json::Map<String, serde_json::Value>) -> Self {
        ReviewError::MissingField {
            field,
            keys: object.keys().cloned().collect(),
        }
    }
}

/// Configuration errors. Always fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required environment variables are absent or blank.
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    MissingVar(Vec<&'static str>),

    /// A variable is present but unusable.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Result type alias for ReviewError
pub type Result<T, E = ReviewError> = std::result::Result<T, E>;

/// Longest excerpt of upstream text (response body, payload) kept in an error.
pub const EXCERPT_CHARS: usize = 500;

/// Cut `text` to at most `max` characters, ending with `…` when anything was dropped.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let end = text
        .char_indices()
        .nth(max.saturating_sub(1))
        .map_or(text.len(), |(idx, _)| idx);
    format!("{}…", &text[..end])
}
