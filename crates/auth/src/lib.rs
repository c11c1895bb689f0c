//! Request authorization context for atelier.
//!
//! This crate provides:
//! - Session store clients (remote auth service, in-memory for development)
//! - The auth context resolver middleware that tags responses with identity hints
//! - Axum extractors for the resolved identity

mod config;
mod credentials;
mod error;
mod extractors;
mod handlers;
mod middleware;
mod sessions;
mod state;

pub use config::{AuthConfig, SessionStoreConfig};
pub use credentials::credentials_from_headers;
pub use error::AuthError;
pub use extractors::{CurrentIdentity, OptionalIdentity};
pub use handlers::auth_routes;
pub use middleware::{resolve_auth_context, AuthContext};
#[cfg(any(test, feature = "mock"))]
pub use sessions::InMemorySessionStore;
pub use sessions::RemoteSessionStore;
pub use state::AuthState;
