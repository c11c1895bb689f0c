//! Auth context resolver middleware.
//!
//! Runs before routing for every request outside the exclusion set. It looks
//! up the caller's session, applies the admin path policy, and tags the
//! response with identity hints for downstream consumers. Session store
//! trouble never fails the request unless the failure policy is `closed`.

use std::time::Duration;

use atelier_core::auth::{
    decide, invocation_timestamp, AuthError as CoreError, Credentials, FailurePolicy, Identity,
    Session, SessionStore, MIDDLEWARE_CACHE_HEADER, MIDDLEWARE_CACHE_VALUE,
    MIDDLEWARE_INVOKED_HEADER, MIDDLEWARE_INVOKED_VALUE, MIDDLEWARE_TIME_HEADER,
    USER_EMAIL_HEADER, USER_ID_HEADER, USER_ROLE_HEADER,
};
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};

use crate::credentials::credentials_from_headers;
use crate::error::AuthError;
use crate::state::AuthState;

/// Identity resolved for the current request.
///
/// Inserted into request extensions by [`resolve_auth_context`]; read it with
/// the [`CurrentIdentity`](crate::CurrentIdentity) or
/// [`OptionalIdentity`](crate::OptionalIdentity) extractors.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub identity: Option<Identity>,
    pub invoked_at: DateTime<Utc>,
}

/// Middleware resolving the auth context of a request.
///
/// Use with `axum::middleware::from_fn_with_state(auth_state, resolve_auth_context)`.
pub async fn resolve_auth_context(
    State(auth): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let config = auth.config.as_ref();
    let path = request.uri().path().to_owned();

    if let Some(pattern) = config.exclusions.matches(&path) {
        tracing::trace!(path = %path, pattern = %pattern, "Skipping auth context");
        return next.run(request).await;
    }

    let invoked_at = Utc::now();
    let credentials = credentials_from_headers(request.headers(), &config.cookie_name);

    let lookup = lookup_session(auth.sessions.as_ref(), &credentials, config.lookup_timeout).await;
    let session = match lookup {
        Ok(session) => session,
        Err(error) => match config.failure_policy {
            FailurePolicy::Open => {
                tracing::warn!(path = %path, error = %error, "Session lookup failed, continuing anonymously");
                None
            }
            FailurePolicy::Closed => return AuthError::from(error).into_response(),
        },
    };

    let decision = decide(
        config.path_policy,
        &config.admin_routes,
        &path,
        session.is_some(),
    );
    if let Some(target) = decision.redirect_target(&config.admin_routes) {
        tracing::info!(path = %path, decision = %decision, target = %target, "Redirecting admin request");
        return Redirect::temporary(target).into_response();
    }

    let identity = session.as_ref().map(Identity::from_session);
    match &identity {
        Some(identity) => {
            tracing::debug!(path = %path, user_id = %identity.user_id, role = %identity.role, "Resolved session")
        }
        None => tracing::debug!(path = %path, "No session, continuing anonymously"),
    }

    request.extensions_mut().insert(AuthContext {
        identity: identity.clone(),
        invoked_at,
    });

    let mut response = next.run(request).await;
    attach_context_headers(response.headers_mut(), identity.as_ref(), invoked_at);
    response
}

/// Query the session store, bounded by `limit`.
async fn lookup_session(
    store: &dyn SessionStore,
    credentials: &Credentials,
    limit: Duration,
) -> Result<Option<Session>, CoreError> {
    match tokio::time::timeout(limit, store.get_session(credentials)).await {
        Ok(result) => result,
        Err(_) => Err(CoreError::Timeout(limit)),
    }
}

/// Write the resolver headers onto an outgoing response.
///
/// Identity headers are written, all three of them, exactly when a session
/// was found.
fn attach_context_headers(
    headers: &mut HeaderMap,
    identity: Option<&Identity>,
    invoked_at: DateTime<Utc>,
) {
    if let Some(identity) = identity {
        insert_identity_header(headers, USER_ID_HEADER, &identity.user_id);
        insert_identity_header(headers, USER_EMAIL_HEADER, &identity.email);
        insert_identity_header(headers, USER_ROLE_HEADER, &identity.role);
    }

    headers.insert(
        MIDDLEWARE_CACHE_HEADER,
        HeaderValue::from_static(MIDDLEWARE_CACHE_VALUE),
    );
    headers.insert(
        MIDDLEWARE_INVOKED_HEADER,
        HeaderValue::from_static(MIDDLEWARE_INVOKED_VALUE),
    );
    insert_header(
        headers,
        MIDDLEWARE_TIME_HEADER,
        &invocation_timestamp(invoked_at),
    );
}

fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(_) => tracing::warn!(header = name, "Dropping header with invalid value"),
    }
}

/// Identity headers stay present; a value that cannot be sent becomes empty.
fn insert_identity_header(headers: &mut HeaderMap, name: &'static str, value: &str) {
    let value = HeaderValue::from_str(value).unwrap_or_else(|_| {
        tracing::warn!(header = name, "Blanking identity header with invalid value");
        HeaderValue::from_static("")
    });
    headers.insert(name, value);
}
