use std::time::Duration;

use atelier_auth::{auth_routes, resolve_auth_context, AuthState};
use axum::{
    extract::FromRef, http::StatusCode, middleware::from_fn_with_state, routing::get, Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{health::livez, pages::page_shell},
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// The auth context resolver wraps every route added before its layer, the
/// page fallback included; its exclusion set decides which paths it actually
/// inspects. Health probes are added after it and never reach the session
/// store.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let auth = AuthState::from_ref(&state);

    Router::new()
        .merge(auth_routes())
        .fallback(page_shell)
        .layer(from_fn_with_state(auth, resolve_auth_context))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
