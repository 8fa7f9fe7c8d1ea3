//! Example: Implementing a custom `ToneAdvisor`
//!
//! The give-feedback editor talks to tone analysis through the `ToneAdvisor`
//! trait, so anything that can judge a piece of text can stand in for the
//! hosted endpoint: a local model, a lexicon, a test stub.
//!
//! Run: `cargo run --example custom_advisor`

use async_trait::async_trait;

use vibecode::draft::{DraftEditor, FeedbackField};
use vibecode::error::ToneError;
use vibecode::tone::ToneAdvisor;

/// Keyword-counting advisor: no network, deterministic, instant.
struct LexiconAdvisor;

#[async_trait]
impl ToneAdvisor for LexiconAdvisor {
    async fn analyze(&self, text: &str) -> Result<String, ToneError> {
        let lower = text.to_lowercase();
        let warm = ["great", "thanks", "impressive", "clear", "helped"]
            .iter()
            .filter(|word| lower.contains(*word))
            .count();
        let blunt = ["never", "always", "fail", "lazy", "wrong"]
            .iter()
            .filter(|word| lower.contains(*word))
            .count();

        Ok(if blunt > warm {
            "Consider softening absolute wording and describing the behavior instead.".to_string()
        } else {
            "Tone reads constructive; specific examples land well.".to_string()
        })
    }
}

#[tokio::main]
async fn main() {
    let advisor = LexiconAdvisor;
    let mut editor = DraftEditor::new();

    editor.set_text(
        FeedbackField::Strengths,
        "Great quarter: your demo prep helped the whole team stay clear on goals.",
    );
    editor.check_tone(FeedbackField::Strengths, &advisor).await;
    if let Some(guidance) = editor.guidance(FeedbackField::Strengths) {
        println!("strengths guidance: {}", guidance.message);
    }

    editor.set_text(FeedbackField::Growth, "You always fail to share updates.");
    editor.check_tone(FeedbackField::Growth, &advisor).await;
    if let Some(guidance) = editor.guidance(FeedbackField::Growth) {
        println!("growth guidance: {}", guidance.message);
    }
}
