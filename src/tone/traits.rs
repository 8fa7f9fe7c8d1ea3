use crate::error::ToneError;
use async_trait::async_trait;

/// A tone-analysis backend.
///
/// Implementations take the raw draft text of a single field and return
/// guidance prose. They must not retry or cache: the editor issues one call
/// per explicit user request and sequences the results itself.
#[async_trait]
pub trait ToneAdvisor: Send + Sync {
    /// Analyze one field's text. `Ok` carries non-empty guidance prose.
    async fn analyze(&self, text: &str) -> Result<String, ToneError>;
}
