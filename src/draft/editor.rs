use super::guidance::ToneGuidance;
use crate::error::{FeedbackError, ToneError};
use crate::tone::ToneAdvisor;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// Field capacity enforced at the input boundary. The editor itself never
/// truncates; oversize input is rejected before it reaches `set_text`.
pub const MAX_FIELD_CHARS: usize = 500;

/// Free-text fields of the give-feedback form. The vibe rating is tracked
/// separately since it never goes through tone analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FeedbackField {
    Strengths,
    Growth,
    Additional,
}

impl FeedbackField {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strengths => "Strengths & Positive Impact (SBI Format)",
            Self::Growth => "Growth Opportunities",
            Self::Additional => "Additional Context",
        }
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Additional)
    }
}

/// In-memory draft of one feedback submission. Lives for the editing session
/// only; discarded on submit or when the user walks away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub strengths: String,
    pub growth: String,
    /// 1-5 once rated; 0 means not rated yet.
    pub vibe_rating: u8,
    pub additional: String,
}

impl FeedbackDraft {
    #[must_use]
    pub fn text(&self, field: FeedbackField) -> &str {
        match field {
            FeedbackField::Strengths => &self.strengths,
            FeedbackField::Growth => &self.growth,
            FeedbackField::Additional => &self.additional,
        }
    }

    fn text_mut(&mut self, field: FeedbackField) -> &mut String {
        match field {
            FeedbackField::Strengths => &mut self.strengths,
            FeedbackField::Growth => &mut self.growth,
            FeedbackField::Additional => &mut self.additional,
        }
    }

    /// Submit gate. The vibe rating is checked before the text fields, so
    /// the first toast a user sees matches what they skipped first.
    pub fn validate_for_submit(&self) -> Result<(), FeedbackError> {
        if self.vibe_rating == 0 {
            return Err(FeedbackError::MissingVibeRating);
        }
        if self.strengths.trim().is_empty() || self.growth.trim().is_empty() {
            return Err(FeedbackError::IncompleteFields);
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct GuidanceSlot {
    guidance: Option<ToneGuidance>,
    /// Sequence number of the most recently issued check for this field.
    issued: u64,
}

/// Handle for one in-flight tone check: the field, the snapshot sent out,
/// and the issuance sequence number used to discard superseded responses.
#[derive(Debug, Clone)]
pub struct PendingToneCheck {
    pub field: FeedbackField,
    pub snapshot: String,
    seq: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ToneCheckOutcome {
    /// The guidance slot now holds this check's result (advice or fallback).
    Applied,
    /// A newer check was issued for the field; this response was dropped.
    Discarded,
    /// The field was blank: prior guidance cleared, no call issued.
    Cleared,
}

/// Owns the draft text and the per-field guidance slots.
///
/// Tone checks are split-phase: `begin_tone_check` snapshots the text and
/// stamps a sequence number, `apply_tone_result` merges the response back in
/// unless a later check has been issued for the same field in the meantime.
/// Last-request-wins is decided by issuance order, never by arrival order.
#[derive(Debug, Default)]
pub struct DraftEditor {
    draft: FeedbackDraft,
    slots: HashMap<FeedbackField, GuidanceSlot>,
    /// Monotonic issuance counter shared across fields.
    next_seq: u64,
}

impl DraftEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &FeedbackDraft {
        &self.draft
    }

    #[must_use]
    pub fn text(&self, field: FeedbackField) -> &str {
        self.draft.text(field)
    }

    /// Replaces the field's text. Does not trigger analysis and does not
    /// touch the guidance slot; staleness is derived by comparing against
    /// `ToneGuidance::for_text` at display time.
    pub fn set_text(&mut self, field: FeedbackField, value: impl Into<String>) {
        *self.draft.text_mut(field) = value.into();
    }

    #[must_use]
    pub fn vibe_rating(&self) -> u8 {
        self.draft.vibe_rating
    }

    pub fn set_vibe(&mut self, rating: u8) {
        // Ratings run 1-5; 0 is unset.
        self.draft.vibe_rating = rating.min(5);
    }

    #[must_use]
    pub fn guidance(&self, field: FeedbackField) -> Option<&ToneGuidance> {
        self.slots.get(&field).and_then(|slot| slot.guidance.as_ref())
    }

    #[must_use]
    pub fn is_guidance_stale(&self, field: FeedbackField) -> bool {
        self.guidance(field)
            .is_some_and(|guidance| guidance.is_stale_for(self.draft.text(field)))
    }

    /// Starts a tone check for the field's current text.
    ///
    /// Blank or whitespace-only text clears any existing guidance and
    /// returns `None` without calling out; the sequence number is still
    /// consumed so an older in-flight response cannot repopulate the slot.
    pub fn begin_tone_check(&mut self, field: FeedbackField) -> Option<PendingToneCheck> {
        let snapshot = self.draft.text(field).to_string();
        self.next_seq += 1;
        let seq = self.next_seq;
        let slot = self.slots.entry(field).or_default();
        slot.issued = seq;

        if snapshot.trim().is_empty() {
            slot.guidance = None;
            return None;
        }

        Some(PendingToneCheck {
            field,
            snapshot,
            seq,
        })
    }

    /// Merges a resolved check back into the field's slot.
    ///
    /// The response is dropped when its sequence number is no longer the
    /// latest issued for the field. Failures become the fixed fallback
    /// guidance; the cause only reaches the log.
    pub fn apply_tone_result(
        &mut self,
        pending: &PendingToneCheck,
        result: Result<String, ToneError>,
    ) -> ToneCheckOutcome {
        let slot = self.slots.entry(pending.field).or_default();
        if slot.issued != pending.seq {
            debug!(field = %pending.field, "discarding superseded tone response");
            return ToneCheckOutcome::Discarded;
        }

        slot.guidance = Some(match result {
            Ok(message) => ToneGuidance::advice(pending.snapshot.clone(), message),
            Err(err) => {
                warn!(field = %pending.field, error = %err, "tone check failed; showing fallback");
                ToneGuidance::fallback(pending.snapshot.clone())
            }
        });
        ToneCheckOutcome::Applied
    }

    /// One-shot check: snapshot, call the advisor, merge the result. Holding
    /// `&mut self` across the await means no other check for this editor can
    /// interleave; split-phase callers use `begin`/`apply` directly.
    pub async fn check_tone(
        &mut self,
        field: FeedbackField,
        advisor: &dyn ToneAdvisor,
    ) -> ToneCheckOutcome {
        let Some(pending) = self.begin_tone_check(field) else {
            return ToneCheckOutcome::Cleared;
        };
        let result = advisor.analyze(&pending.snapshot).await;
        self.apply_tone_result(&pending, result)
    }

    /// Empties the field and its guidance slot. Consumes a sequence number
    /// so in-flight responses for the old text are discarded on arrival.
    pub fn clear_field(&mut self, field: FeedbackField) {
        *self.draft.text_mut(field) = String::new();
        self.next_seq += 1;
        let slot = self.slots.entry(field).or_default();
        slot.guidance = None;
        slot.issued = self.next_seq;
    }

    pub fn reset(&mut self) {
        for field in FeedbackField::iter() {
            self.clear_field(field);
        }
        self.draft.vibe_rating = 0;
    }
}
