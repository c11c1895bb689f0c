//! Application state shared by all request handlers.

use atelier_auth::AuthState;

/// Shared application state.
///
/// Cloned for each request handler; the auth state is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
}

impl AppState {
    pub fn new(auth: AuthState) -> Self {
        Self { auth }
    }
}

impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}
