//! Tone advisory client.
//!
//! One POST per check: `{"text": ...}` out, `{"analysis": ...}` or
//! `{"content": ...}` back. No retries, no caching; a failed call is reported
//! as a [`crate::error::ToneError`] and the caller decides what to show.

mod client;
mod http;
mod sanitize;
mod traits;

pub use client::HttpToneAdvisor;
pub use http::build_tone_client;
pub use sanitize::{sanitize_api_error, scrub_secret_patterns};
pub use traits::ToneAdvisor;
