//! Page shell standing in for the site renderer.
//!
//! Blog, portfolio and admin pages are rendered elsewhere; this handler
//! answers 404 for every path it reaches, naming the path and the viewer so
//! the auth context can be observed end to end.

use atelier_auth::OptionalIdentity;
use axum::http::{StatusCode, Uri};

/// Fallback handler for every unrouted path.
pub async fn page_shell(
    uri: Uri,
    OptionalIdentity(identity): OptionalIdentity,
) -> (StatusCode, String) {
    let body = match identity {
        Some(identity) => format!("{} (signed in as {})", uri.path(), identity.user_id),
        None => uri.path().to_string(),
    };
    (StatusCode::NOT_FOUND, body)
}
