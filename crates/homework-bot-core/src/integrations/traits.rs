use serde_json::Value;

use crate::error::Result;

/// Source of raw review-status payloads.
///
/// One call is one HTTP round trip; retrying is the poll loop's business.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    /// Fetch every update since `since` (Unix seconds) as undecoded JSON.
    async fn fetch(&self, since: i64) -> Result<Value>;
}

/// Longest text a sink is asked to deliver; the Telegram Bot API rejects more.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Destination for human-readable notifications.
#[allow(async_fn_in_trait)]
pub trait MessageSink {
    /// Deliver `text` to the configured recipient.
    ///
    /// Failures come back as [`crate::ReviewError::DeliveryFailure`].
    async fn send(&self, text: &str) -> Result<()>;
}
