//! Turning raw status payloads into notification text.
//!
//! - [`validate`]: shape checks on the decoded API answer
//! - [`verdict`]: status-code table, message composition and the
//!   "last seen status" tracker

pub mod validate;
pub mod verdict;

pub use validate::{check_response, StatusResponse};
pub use verdict::{parse_status, StatusTracker, StatusUpdate, Verdict};
