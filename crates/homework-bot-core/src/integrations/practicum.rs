//! Review status API client -- one authenticated GET per poll.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::{clip, ReviewError, Result, EXCERPT_CHARS};
use crate::integrations::traits::StatusSource;

/// Headers as they appear in error messages; the credential never leaves the process.
const REDACTED_HEADERS: &str = r#"{"Authorization": "OAuth ***"}"#;

pub struct PracticumClient {
    http: Client,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        Self::with_endpoint(
            config.endpoint.clone(),
            &config.practicum_token,
            config.http_timeout,
        )
    }

    pub fn with_endpoint(
        endpoint: Url,
        token: &str,
        timeout: Duration,
    ) -> std::result::Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint,
            token: token.to_string(),
        })
    }
}

impl StatusSource for PracticumClient {
    async fn fetch(&self, since: i64) -> Result<Value> {
        let params = format!("{{\"from_date\": {since}}}");
        let connection_failure = |source: reqwest::Error| ReviewError::ConnectionFailure {
            endpoint: self.endpoint.to_string(),
            headers: REDACTED_HEADERS.to_string(),
            params: params.clone(),
            source: source.without_url(),
        };

        let resp = self
            .http
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", since)])
            .send()
            .await
            .map_err(connection_failure)?;

        if resp.status() != StatusCode::OK {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ReviewError::ApiUnavailable {
                endpoint: self.endpoint.to_string(),
                headers: REDACTED_HEADERS.to_string(),
                params: params.clone(),
                status,
                body: clip(&body, EXCERPT_CHARS),
            });
        }

        let text = resp.text().await.map_err(connection_failure)?;
        tracing::trace!(bytes = text.len(), "status API answered");
        Ok(serde_json::from_str(&text)?)
    }
}
