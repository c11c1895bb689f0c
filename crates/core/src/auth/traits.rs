use async_trait::async_trait;

use super::{AuthError, Credentials, Session};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Remote session lookup.
///
/// `Ok(None)` means the credentials carry no active session; errors are
/// reserved for the store itself misbehaving.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Resolve the session belonging to these credentials.
    async fn get_session(&self, credentials: &Credentials) -> Result<Option<Session>>;
}
