//! Review verdicts and status-change detection.

use serde::Serialize;
use serde_json::Value;

use crate::error::{clip, ReviewError, Result, EXCERPT_CHARS};

/// Review outcome reported by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// Raw status code as the API spells it.
    pub fn code(self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    /// Human-readable verdict.
    pub fn text(self) -> &'static str {
        match self {
            Verdict::Approved => "reviewed, no issues",
            Verdict::Reviewing => "under review",
            Verdict::Rejected => "reviewed, has remarks",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn known_codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.code()).collect()
    }
}

/// One interpreted submission record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub verdict: Verdict,
    pub homework_name: String,
    /// Text delivered to the recipient.
    pub message: String,
}

/// Interpret one submission record.
///
/// `status` is read and resolved before `homework_name`, so a record with an
/// unknown status and no name reports the unknown status.
pub fn parse_status(homework: &Value) -> Result<StatusUpdate> {
    let record = homework.as_object().ok_or_else(|| {
        ReviewError::TypeMismatch(format!(
            "homework record {} is not an object",
            clip(&homework.to_string(), EXCERPT_CHARS)
        ))
    })?;

    let status = record
        .get("status")
        .filter(|v| !v.is_null())
        .ok_or_else(|| ReviewError::missing("status", record))?;
    let status = status
        .as_str()
        .ok_or_else(|| ReviewError::TypeMismatch(format!("homework status {status} is not a string")))?;
    let verdict = Verdict::from_code(status).ok_or_else(|| ReviewError::UnknownVerdict {
        status: status.to_string(),
        known: Verdict::known_codes(),
    })?;

    let name = record
        .get("homework_name")
        .filter(|v| !v.is_null())
        .ok_or_else(|| ReviewError::missing("homework_name", record))?;
    let name = name
        .as_str()
        .ok_or_else(|| ReviewError::TypeMismatch(format!("homework_name {name} is not a string")))?;

    Ok(StatusUpdate {
        verdict,
        homework_name: name.to_string(),
        message: format!("Status changed for submission \"{name}\". {}", verdict.text()),
    })
}

/// Remembers the last notified verdict and swallows repeats.
///
/// Only the status code is compared: a renamed submission with the same
/// status is not news.
#[derive(Debug, Default, Clone)]
pub struct StatusTracker {
    last: Option<Verdict>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_last(last: Verdict) -> Self {
        Self { last: Some(last) }
    }

    pub fn last(&self) -> Option<Verdict> {
        self.last
    }

    /// Return the message if the verdict changed, recording it.
    pub fn observe(&mut self, update: StatusUpdate) -> Option<String> {
        if self.last == Some(update.verdict) {
            tracing::debug!(status = update.verdict.code(), "homework status unchanged");
            return None;
        }
        self.last = Some(update.verdict);
        Some(update.message)
    }

    /// Interpret `homework` and keep only a changed status.
    ///
    /// Errors leave the remembered verdict untouched.
    pub fn interpret(&mut self, homework: &Value) -> Result<Option<String>> {
        let update = parse_status(homework)?;
        Ok(self.observe(update))
    }
}
