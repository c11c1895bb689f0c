//! Credential extraction from request headers.

use atelier_core::auth::{parse_bearer, Credentials};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum_extra::extract::CookieJar;

/// Collect the credentials a request presents.
///
/// The `Authorization: Bearer` header wins (API clients); otherwise the
/// session cookie is used (browsers). Anything else is anonymous.
pub fn credentials_from_headers(headers: &HeaderMap, cookie_name: &str) -> Credentials {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer);
    if let Some(token) = bearer {
        return Credentials::bearer(token);
    }

    let jar = CookieJar::from_headers(headers);
    match jar.get(cookie_name) {
        Some(cookie) if !cookie.value().is_empty() => Credentials::bearer(cookie.value()),
        _ => Credentials::anonymous(),
    }
}
