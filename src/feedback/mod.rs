//! Feedback-request flows and submission copy.

mod request;

pub use request::{FeedbackRequest, MAX_SPECIFIC_PEERS, RequestKind};

/// Toast shown after a successful give-feedback submit.
pub const SUBMITTED_MESSAGE: &str = "Feedback submitted successfully! 🎉";
