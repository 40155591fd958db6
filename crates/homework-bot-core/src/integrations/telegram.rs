//! Telegram integration -- deliver notifications through the Bot API.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use url::Url;

use crate::config::Config;
use crate::error::{clip, ReviewError, Result};
use crate::integrations::traits::{MessageSink, MAX_MESSAGE_CHARS};

pub struct TelegramNotifier {
    http: Client,
    api: Url,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        Self::with_api(
            config.telegram_api.clone(),
            &config.telegram_token,
            &config.telegram_chat_id,
            config.http_timeout,
        )
    }

    pub fn with_api(
        api: Url,
        token: &str,
        chat_id: &str,
        timeout: Duration,
    ) -> std::result::Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api,
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api.as_str().trim_end_matches('/'),
            self.token
        )
    }
}

impl MessageSink for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let body = json!({ "chat_id": self.chat_id, "text": clip(text, MAX_MESSAGE_CHARS) });

        // Request URLs embed the bot token, so transport errors drop theirs.
        let resp = self
            .http
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| ReviewError::DeliveryFailure(e.without_url().to_string()))?;

        let status = resp.status();
        let answer: Value = resp.json().await.unwrap_or(Value::Null);

        if !status.is_success() || answer.get("ok").and_then(Value::as_bool) != Some(true) {
            let description = answer
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("no description");
            return Err(ReviewError::DeliveryFailure(format!(
                "Telegram sendMessage error (HTTP {status}): {description}"
            )));
        }

        tracing::debug!(chat_id = %self.chat_id, "bot sent message \"{text}\"");
        Ok(())
    }
}
