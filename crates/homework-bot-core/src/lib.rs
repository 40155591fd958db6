//! # homework-bot core library
//!
//! Polls the homework review status API and tells one Telegram chat when the
//! newest submission's review status changes. The binary crate is a thin
//! shell over this library.
//!
//! ## Architecture
//!
//! - **Integrations**: HTTP clients for the status API ([`PracticumClient`])
//!   and the Telegram Bot API ([`TelegramNotifier`]) behind the
//!   [`StatusSource`] / [`MessageSink`] traits
//! - **Review**: payload validation, verdict table and the "last seen
//!   status" tracker
//! - **Poller**: the fetch / validate / interpret / notify / sleep loop and
//!   its error classification
//!
//! ## Key Components
//!
//! - [`Poller`]: the poll loop
//! - [`Config`]: environment-based configuration
//! - [`ReviewError`]: tagged failures, classified by [`Severity`]

pub mod config;
pub mod error;
pub mod integrations;
pub mod poller;
pub mod review;

pub use config::Config;
pub use error::{ConfigError, ReviewError, Severity};
pub use integrations::{MessageSink, PracticumClient, StatusSource, TelegramNotifier};
pub use poller::{CycleOutcome, PollMemory, PollState, Poller};
pub use review::{check_response, parse_status, StatusResponse, StatusTracker, StatusUpdate, Verdict};
