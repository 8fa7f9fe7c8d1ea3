//! Draft state for the give-feedback form.
//!
//! [`DraftEditor`] owns the per-field text and the latest tone guidance for
//! each field, and sequences tone checks so a slow response can never
//! overwrite the result of a later request.

mod editor;
mod guidance;

pub use editor::{
    DraftEditor, FeedbackDraft, FeedbackField, MAX_FIELD_CHARS, PendingToneCheck,
    ToneCheckOutcome,
};
pub use guidance::{FALLBACK_MESSAGE, ToneGuidance};
