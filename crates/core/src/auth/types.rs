use serde::{Deserialize, Serialize};

/// Role reported for sessions that carry none.
pub const DEFAULT_ROLE: &str = "user";

/// Session record returned by the remote session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            role: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Email address, or the empty string when the store has none.
    pub fn email_or_default(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// Role, or [`DEFAULT_ROLE`] when unset or blank.
    pub fn role_or_default(&self) -> &str {
        match self.role.as_deref() {
            Some(role) if !role.is_empty() => role,
            _ => DEFAULT_ROLE,
        }
    }
}

/// Credentials presented by a request, scoped to a single lookup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    access_token: Option<String>,
}

impl Credentials {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.access_token.is_none()
    }
}

// Tokens never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Identity hints derived from a session, with defaults applied.
///
/// These are non-authoritative: handlers that make access decisions must
/// consult the session store themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub role: String,
}

impl Identity {
    pub fn from_session(session: &Session) -> Self {
        Self {
            user_id: session.user_id.clone(),
            email: session.email_or_default().to_string(),
            role: session.role_or_default().to_string(),
        }
    }
}

impl From<&Session> for Identity {
    fn from(session: &Session) -> Self {
        Self::from_session(session)
    }
}
