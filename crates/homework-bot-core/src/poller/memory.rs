//! State carried from one poll cycle to the next.

use crate::review::StatusTracker;

/// Everything the poll loop remembers between cycles. Lost on restart.
#[derive(Debug, Clone)]
pub struct PollMemory {
    /// Last notified verdict.
    pub tracker: StatusTracker,
    /// Text of the last alert handed to the notifier.
    pub last_alert: Option<String>,
    /// `from_date` for the next fetch (Unix seconds).
    pub cursor: i64,
}

impl PollMemory {
    /// Fresh memory asking only for updates from this moment on.
    pub fn starting_now() -> Self {
        Self::starting_at(chrono::Utc::now().timestamp())
    }

    pub fn starting_at(cursor: i64) -> Self {
        Self {
            tracker: StatusTracker::new(),
            last_alert: None,
            cursor,
        }
    }

    /// Record `text` as the latest alert; `false` if it repeats the previous one.
    ///
    /// Comparison is on the rendered text, so distinct errors that print the
    /// same way are one alert.
    pub fn admit_alert(&mut self, text: &str) -> bool {
        if self.last_alert.as_deref() == Some(text) {
            return false;
        }
        self.last_alert = Some(text.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_now_uses_current_time() {
        let before = chrono::Utc::now().timestamp();
        let memory = PollMemory::starting_now();
        assert!(memory.cursor >= before);
        assert!(memory.last_alert.is_none());
        assert!(memory.tracker.last().is_none());
    }

    #[test]
    fn identical_alert_is_admitted_once() {
        let mut memory = PollMemory::starting_at(0);
        assert!(memory.admit_alert("Program failure: boom"));
        assert!(!memory.admit_alert("Program failure: boom"));
        assert!(memory.admit_alert("Program failure: other"));
        assert!(memory.admit_alert("Program failure: boom"));
    }
}
