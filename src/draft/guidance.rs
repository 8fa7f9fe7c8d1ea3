/// Shown whenever a tone check fails, regardless of cause. The cause only
/// reaches logs; this exact wording is what users see.
pub const FALLBACK_MESSAGE: &str = "Couldn't analyze tone right now. Please try again.";

/// The latest tone-analysis result for one field.
///
/// Guidance is tagged with the exact snapshot it was computed from, so the
/// UI can flag it as stale once the live text diverges. Each new result
/// replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneGuidance {
    /// The snapshot the analysis ran against.
    pub for_text: String,
    /// Guidance prose, or the fallback message when `is_error` is set.
    pub message: String,
    pub is_error: bool,
}

impl ToneGuidance {
    pub fn advice(for_text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            for_text: for_text.into(),
            message: message.into(),
            is_error: false,
        }
    }

    pub fn fallback(for_text: impl Into<String>) -> Self {
        Self {
            for_text: for_text.into(),
            message: FALLBACK_MESSAGE.to_string(),
            is_error: true,
        }
    }

    /// True when the live text no longer matches the analyzed snapshot.
    #[must_use]
    pub fn is_stale_for(&self, live_text: &str) -> bool {
        self.for_text != live_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_carries_message_without_error_flag() {
        let guidance = ToneGuidance::advice("Great job", "Sounds very positive!");
        assert_eq!(guidance.for_text, "Great job");
        assert_eq!(guidance.message, "Sounds very positive!");
        assert!(!guidance.is_error);
    }

    #[test]
    fn fallback_uses_fixed_message_and_error_flag() {
        let guidance = ToneGuidance::fallback("some draft");
        assert_eq!(
            guidance.message,
            "Couldn't analyze tone right now. Please try again."
        );
        assert!(guidance.is_error);
    }

    #[test]
    fn staleness_is_exact_text_equality() {
        let guidance = ToneGuidance::advice("draft one", "advice");
        assert!(!guidance.is_stale_for("draft one"));
        assert!(guidance.is_stale_for("draft one "));
        assert!(guidance.is_stale_for("draft two"));
    }
}
