use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Vibe Code.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum VibeError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Tone advisory ────────────────────────────────────────────────────
    #[error("tone: {0}")]
    Tone(#[from] ToneError),

    // ── Session ─────────────────────────────────────────────────────────
    #[error("session: {0}")]
    Session(#[from] SessionError),

    // ── Feedback forms ──────────────────────────────────────────────────
    #[error("feedback: {0}")]
    Feedback(#[from] FeedbackError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Tone advisory errors ────────────────────────────────────────────────────

/// Failure of a single tone-analysis call.
///
/// The variants are cause codes: callers always surface the same fallback
/// message, but logs and tests can tell a dead network from a bad payload.
#[derive(Debug, Error)]
pub enum ToneError {
    /// The request never produced a response (DNS, connect, timeout, read).
    #[error("tone request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("tone service returned {status}: {detail}")]
    Api { status: u16, detail: String },

    /// The response body was not JSON or carried no usable guidance text.
    #[error("malformed tone payload: {detail}")]
    Malformed { detail: String },
}

// ─── Session errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not logged in (run `vibecode login` first)")]
    NotLoggedIn,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("store: {0}")]
    Store(String),
}

// ─── Feedback form errors ───────────────────────────────────────────────────

/// Validation failures for drafts and requests. The display strings of the
/// first three variants are shown to users verbatim and must stay stable.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Please rate your overall vibe")]
    MissingVibeRating,

    #[error("Please complete all required fields")]
    IncompleteFields,

    #[error("Please select at least one peer")]
    NoPeersSelected,

    #[error("select between 1 and {max} peers")]
    TooManyPeers { max: usize },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, VibeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_correctly() {
        let err = VibeError::Config(ConfigError::Validation("bad endpoint".into()));
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn tone_api_error_displays_status_and_detail() {
        let err = VibeError::Tone(ToneError::Api {
            status: 503,
            detail: "overloaded".into(),
        });
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn tone_malformed_displays_detail() {
        let err = ToneError::Malformed {
            detail: "no analysis or content key".into(),
        };
        assert!(err.to_string().contains("no analysis or content key"));
    }

    #[test]
    fn feedback_errors_keep_user_facing_strings() {
        assert_eq!(
            FeedbackError::MissingVibeRating.to_string(),
            "Please rate your overall vibe"
        );
        assert_eq!(
            FeedbackError::IncompleteFields.to_string(),
            "Please complete all required fields"
        );
        assert_eq!(
            FeedbackError::NoPeersSelected.to_string(),
            "Please select at least one peer"
        );
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let vibe_err: VibeError = anyhow_err.into();
        assert!(vibe_err.to_string().contains("something went wrong"));
    }

    #[test]
    fn session_not_logged_in_mentions_login() {
        let err = VibeError::Session(SessionError::NotLoggedIn);
        assert!(err.to_string().contains("vibecode login"));
    }
}
