//! HTTP handlers for auth routes.

use atelier_core::auth::Identity;
use axum::{routing::get, Json, Router};

use crate::extractors::CurrentIdentity;

/// Creates the auth router.
///
/// Routes:
/// - `GET /auth/me` - Identity resolved for the current request
pub fn auth_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/auth/me", get(me))
}

async fn me(CurrentIdentity(identity): CurrentIdentity) -> Json<Identity> {
    Json(identity)
}
