//! In-memory session storage for development and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use atelier_core::auth::{Credentials, Result, Session, SessionStore};

/// In-memory session store keyed by access token.
///
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionStore {
    /// Creates a new empty in-memory session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `token` resolve to `session`.
    pub async fn insert(&self, token: impl Into<String>, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.into(), session);
    }

    /// Forget the session behind `token`.
    pub async fn revoke(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_session(&self, credentials: &Credentials) -> Result<Option<Session>> {
        let Some(token) = credentials.access_token() else {
            return Ok(None);
        };
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_insert_and_get() {
        let store = InMemorySessionStore::new();
        store
            .insert("token-1", Session::new("user-123").with_email("a@b.com"))
            .await;

        let session = store
            .get_session(&Credentials::bearer("token-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.user_id, "user-123");
        assert_eq!(session.email.as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn test_unknown_token_is_anonymous() {
        let store = InMemorySessionStore::new();

        let result = store
            .get_session(&Credentials::bearer("nonexistent"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_anonymous_credentials_resolve_nothing() {
        let store = InMemorySessionStore::new();
        store.insert("", Session::new("ghost")).await;

        let result = store.get_session(&Credentials::anonymous()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_revoke() {
        let store = InMemorySessionStore::new();
        store.insert("token-1", Session::new("user-123")).await;
        store.revoke("token-1").await;

        let result = store
            .get_session(&Credentials::bearer("token-1"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let store = InMemorySessionStore::new();
        let clone = store.clone();

        store.insert("token-1", Session::new("user-123")).await;

        let retrieved = clone
            .get_session(&Credentials::bearer("token-1"))
            .await
            .unwrap();
        assert!(retrieved.is_some());
    }
}
