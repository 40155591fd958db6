//! Poll loop.
//!
//! One cycle is fetch -> validate -> interpret -> maybe notify. Between
//! cycles the loop sleeps a fixed period; time spent inside the cycle is not
//! subtracted, so the real period is cycle time plus the delay.
//!
//! ## Failure handling
//!
//! ```text
//! Quiet error   -> log
//! Alert error   -> log, deliver "Program failure: ..." unless same text as last alert
//! Delivery fail -> log (never alerted)
//! ```
//!
//! Nothing in a cycle stops the loop. The only fatal condition, missing
//! configuration, is caught before a `Poller` exists.

use std::time::Duration;

use crate::error::{clip, Result, ReviewError, Severity};
use crate::integrations::{MessageSink, StatusSource, MAX_MESSAGE_CHARS};
use crate::poller::memory::PollMemory;
use crate::review::check_response;

/// Lifecycle of a [`Poller`].
///
/// `Halted` is only reached when a bounded [`Poller::run`] has done its
/// cycles. Missing configuration halts the binary before a poller exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Running,
    Halted,
}

/// What a single cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Status changed; notification handed to the sink.
    Notified { message: String, delivered: bool },
    /// Newest submission has the status already notified.
    Unchanged,
    /// `homeworks` was empty.
    NoSubmissions,
    /// Failure logged without alerting.
    Quiet { error: String },
    /// Failure alerted.
    Alerted { message: String, delivered: bool },
    /// Failure whose alert text matches the previous alert.
    AlertSuppressed { message: String },
}

enum Step {
    Changed(String),
    Unchanged,
    Empty,
}

pub struct Poller<S, N> {
    source: S,
    sink: N,
    memory: PollMemory,
    retry_period: Duration,
    state: PollState,
}

impl<S: StatusSource, N: MessageSink> Poller<S, N> {
    /// Create a poller whose first fetch asks for updates since `cursor`.
    pub fn new(source: S, sink: N, retry_period: Duration, cursor: i64) -> Self {
        Self::with_memory(source, sink, retry_period, PollMemory::starting_at(cursor))
    }

    pub fn with_memory(source: S, sink: N, retry_period: Duration, memory: PollMemory) -> Self {
        Self {
            source,
            sink,
            memory,
            retry_period,
            state: PollState::Running,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn memory(&self) -> &PollMemory {
        &self.memory
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    // ── Loop ─────────────────────────────────────────────────────────

    /// Run cycles until `max_cycles` is reached, or forever when `None`.
    ///
    /// No sleep follows the final cycle of a bounded run.
    pub async fn run(&mut self, max_cycles: Option<u64>) {
        self.state = PollState::Running;
        let mut cycles: u64 = 0;
        loop {
            let outcome = self.run_cycle().await;
            cycles += 1;
            tracing::debug!(cycle = cycles, cursor = self.memory.cursor, ?outcome, "poll cycle finished");

            if max_cycles.is_some_and(|max| cycles >= max) {
                self.state = PollState::Halted;
                return;
            }
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Perform exactly one cycle. Never fails: every error is classified here.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll().await {
            Ok(Step::Changed(message)) => {
                let delivered = self.deliver(&message).await;
                CycleOutcome::Notified { message, delivered }
            }
            Ok(Step::Unchanged) => CycleOutcome::Unchanged,
            Ok(Step::Empty) => CycleOutcome::NoSubmissions,
            Err(err) => self.handle_failure(err).await,
        }
    }

    async fn poll(&mut self) -> Result<Step> {
        let payload = self.source.fetch(self.memory.cursor).await?;
        let response = check_response(&payload)?;
        // Advance as soon as the payload is trusted; a bad record must not
        // pin the cursor.
        self.memory.cursor = response.current_date;

        let Some(newest) = response.newest() else {
            tracing::debug!("response \"homeworks\" is an empty list");
            return Ok(Step::Empty);
        };

        Ok(match self.memory.tracker.interpret(newest)? {
            Some(message) => Step::Changed(message),
            None => Step::Unchanged,
        })
    }

    async fn handle_failure(&mut self, err: ReviewError) -> CycleOutcome {
        let message = clip(&format!("Program failure: {err}"), MAX_MESSAGE_CHARS);
        tracing::error!(error = ?err, "{message}");

        match err.severity() {
            Severity::Quiet => CycleOutcome::Quiet {
                error: err.to_string(),
            },
            Severity::Alert => {
                if !self.memory.admit_alert(&message) {
                    tracing::debug!("alert identical to the previous one, not sending");
                    return CycleOutcome::AlertSuppressed { message };
                }
                let delivered = self.deliver(&message).await;
                CycleOutcome::Alerted { message, delivered }
            }
        }
    }

    async fn deliver(&self, message: &str) -> bool {
        match self.sink.send(message).await {
            Ok(()) => {
                tracing::info!("notification sent: \"{message}\"");
                true
            }
            Err(err) => {
                tracing::error!("error sending Telegram message \"{message}\": {err}");
                false
            }
        }
    }
}
