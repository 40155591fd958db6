//! Response shape validation.

use serde_json::Value;

use crate::error::{clip, ReviewError, Result, EXCERPT_CHARS};

/// A status payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResponse {
    /// Submission records, newest first. May be empty.
    pub homeworks: Vec<Value>,
    /// Server time of the answer; the next poll's `from_date`.
    pub current_date: i64,
}

impl StatusResponse {
    pub fn newest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}

/// Check that `payload` has the keys and shapes the bot relies on.
///
/// Checks run in a fixed order: object, `homeworks` present, `current_date`
/// present, `homeworks` is a list, `current_date` is an integer. A `null`
/// value counts as absent. An empty `homeworks` list is valid.
pub fn check_response(payload: &Value) -> Result<StatusResponse> {
    let object = payload.as_object().ok_or_else(|| {
        ReviewError::TypeMismatch(format!(
            "API response {} is not an object",
            clip(&payload.to_string(), EXCERPT_CHARS)
        ))
    })?;

    let homeworks = object
        .get("homeworks")
        .filter(|v| !v.is_null())
        .ok_or_else(|| ReviewError::missing("homeworks", object))?;
    let current_date = object
        .get("current_date")
        .filter(|v| !v.is_null())
        .ok_or_else(|| ReviewError::missing("current_date", object))?;

    let homeworks = homeworks.as_array().ok_or_else(|| {
        ReviewError::TypeMismatch(format!(
            "\"homeworks\" in API response is not a list: {}",
            clip(&homeworks.to_string(), EXCERPT_CHARS)
        ))
    })?;
    let current_date = current_date.as_i64().ok_or_else(|| {
        ReviewError::TypeMismatch(format!(
            "\"current_date\" in API response is not an integer timestamp: {}",
            clip(&current_date.to_string(), EXCERPT_CHARS)
        ))
    })?;

    Ok(StatusResponse {
        homeworks: homeworks.clone(),
        current_date,
    })
}
