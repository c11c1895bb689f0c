//! Shared state for the auth context resolver.

use std::sync::Arc;

use atelier_core::auth::SessionStore;
use axum::extract::FromRef;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::sessions::RemoteSessionStore;

/// Shared state for the resolver and auth routes.
#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionStore>,
    pub config: Arc<AuthConfig>,
}

impl AuthState {
    /// Creates a new AuthState over any session store.
    pub fn new(sessions: Arc<dyn SessionStore>, config: AuthConfig) -> Self {
        Self {
            sessions,
            config: Arc::new(config),
        }
    }

    /// Creates an AuthState talking to the remote session store in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store URL cannot be used as a base.
    pub fn remote(config: AuthConfig) -> Result<Self, AuthError> {
        let store = RemoteSessionStore::new(&config.store)?;
        tracing::info!(
            user_url = %store.user_url(),
            path_policy = %config.path_policy,
            failure_policy = %config.failure_policy,
            "Using remote session store"
        );
        Ok(Self::new(Arc::new(store), config))
    }
}

/// Allows AuthState to be extracted from a parent state.
impl<S> FromRef<S> for AuthState
where
    S: AsRef<AuthState>,
{
    fn from_ref(state: &S) -> Self {
        state.as_ref().clone()
    }
}
