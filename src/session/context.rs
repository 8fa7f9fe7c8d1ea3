use crate::error::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "title_case")]
pub enum Role {
    #[default]
    Employee,
    Admin,
}

/// Who is "logged in" for this process. Initialized at startup from the
/// session file, discarded on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub email: String,
    pub role: Role,
    pub logged_in_at: DateTime<Utc>,
}

impl SessionContext {
    /// Accepts any plausible email; this mirrors the mock login, which never
    /// verified credentials.
    pub fn login(email: &str, role: Role) -> Result<Self, SessionError> {
        let email = email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(SessionError::InvalidEmail(email.to_string()));
        }

        Ok(Self {
            email: email.to_string(),
            role,
            logged_in_at: Utc::now(),
        })
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
