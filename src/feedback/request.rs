use crate::error::FeedbackError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A specific-peers request carries at most this many recipients.
pub const MAX_SPECIFIC_PEERS: usize = 5;

/// The four ways to ask for feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum RequestKind {
    /// AI-suggested peers, picked from collaboration patterns.
    Suggest,
    /// Open request any peer can answer.
    #[strum(serialize = "request")]
    General,
    /// Hand-picked teammates, 1-5 of them.
    Specific,
    /// Nudge a peer to request feedback from you.
    SuggestRequest,
}

impl RequestKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Suggest => "AI Suggested Peership",
            Self::General => "General Request",
            Self::Specific => "Specific Peership",
            Self::SuggestRequest => "Suggest Peership Request",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Suggest => {
                "AI recommends peers based on your collaboration patterns and team structure"
            }
            Self::General => "Send a general request that any peer can respond to",
            Self::Specific => "Choose specific teammates you'd like feedback from (1-5 people)",
            Self::SuggestRequest => {
                "Encourage a peer to request feedback from you, fostering reciprocity"
            }
        }
    }

    /// Only the specific-peers flow makes the user pick recipients; the
    /// suggest flow shows its recommendations without a selection step.
    #[must_use]
    pub fn requires_peer_selection(&self) -> bool {
        matches!(self, Self::Specific)
    }
}

/// An outgoing feedback request. Exists only to be confirmed to the user;
/// nothing past the confirmation toast is persisted.
#[derive(Debug, Clone)]
pub struct FeedbackRequest {
    pub id: Uuid,
    pub kind: RequestKind,
    pub peer_ids: Vec<String>,
    pub context: String,
    pub anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl FeedbackRequest {
    pub fn new(
        kind: RequestKind,
        peer_ids: Vec<String>,
        context: impl Into<String>,
        anonymous: bool,
    ) -> Result<Self, FeedbackError> {
        if kind.requires_peer_selection() {
            if peer_ids.is_empty() {
                return Err(FeedbackError::NoPeersSelected);
            }
            if peer_ids.len() > MAX_SPECIFIC_PEERS {
                return Err(FeedbackError::TooManyPeers {
                    max: MAX_SPECIFIC_PEERS,
                });
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            peer_ids,
            context: context.into(),
            anonymous,
            created_at: Utc::now(),
        })
    }

    /// Confirmation toast. The anonymous wording reassures the requester
    /// their identity stays hidden.
    #[must_use]
    pub fn confirmation_message(&self) -> &'static str {
        if self.anonymous {
            "Anonymous feedback request sent! Your identity is protected."
        } else {
            "Feedback request sent successfully!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peers(n: usize) -> Vec<String> {
        (1..=n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn specific_request_requires_at_least_one_peer() {
        let err = FeedbackRequest::new(RequestKind::Specific, vec![], "", false).unwrap_err();
        assert!(matches!(err, FeedbackError::NoPeersSelected));
    }

    #[test]
    fn specific_request_caps_peer_count() {
        let err = FeedbackRequest::new(RequestKind::Specific, peers(6), "", false).unwrap_err();
        assert!(matches!(err, FeedbackError::TooManyPeers { max: 5 }));

        FeedbackRequest::new(RequestKind::Specific, peers(5), "", false).unwrap();
    }

    #[test]
    fn non_specific_kinds_submit_without_a_selection() {
        for kind in [
            RequestKind::Suggest,
            RequestKind::General,
            RequestKind::SuggestRequest,
        ] {
            let request = FeedbackRequest::new(kind, vec![], "", false).unwrap();
            assert!(request.peer_ids.is_empty(), "{kind}");
        }
    }

    #[test]
    fn general_request_keeps_its_context() {
        let request = FeedbackRequest::new(
            RequestKind::General,
            vec![],
            "I'd appreciate feedback on my collaboration and teamwork",
            false,
        )
        .unwrap();

        assert_eq!(
            request.context,
            "I'd appreciate feedback on my collaboration and teamwork"
        );
    }

    #[test]
    fn confirmation_depends_on_anonymity() {
        let anon = FeedbackRequest::new(RequestKind::Specific, peers(1), "", true).unwrap();
        assert_eq!(
            anon.confirmation_message(),
            "Anonymous feedback request sent! Your identity is protected."
        );

        let signed = FeedbackRequest::new(RequestKind::Specific, peers(1), "", false).unwrap();
        assert_eq!(
            signed.confirmation_message(),
            "Feedback request sent successfully!"
        );
    }

    #[test]
    fn each_request_gets_a_fresh_id() {
        let a = FeedbackRequest::new(RequestKind::General, vec![], "", false).unwrap();
        let b = FeedbackRequest::new(RequestKind::General, vec![], "", false).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn kind_descriptions_match_the_request_cards() {
        assert_eq!(
            RequestKind::Suggest.description(),
            "AI recommends peers based on your collaboration patterns and team structure"
        );
        assert_eq!(
            RequestKind::General.description(),
            "Send a general request that any peer can respond to"
        );
        assert_eq!(
            RequestKind::Specific.description(),
            "Choose specific teammates you'd like feedback from (1-5 people)"
        );
        assert_eq!(
            RequestKind::SuggestRequest.description(),
            "Encourage a peer to request feedback from you, fostering reciprocity"
        );
    }

    #[test]
    fn kind_ids_match_the_radio_values() {
        assert_eq!(RequestKind::Suggest.to_string(), "suggest");
        assert_eq!(RequestKind::General.to_string(), "request");
        assert_eq!(RequestKind::Specific.to_string(), "specific");
        assert_eq!(RequestKind::SuggestRequest.to_string(), "suggest-request");
    }
}
