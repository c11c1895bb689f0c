use chrono::{DateTime, SecondsFormat, Utc};

/// Format the resolver invocation time for the `x-middleware-time` header.
///
/// RFC 3339 with millisecond precision and a `Z` suffix, e.g.
/// `2024-05-01T12:30:00.123Z`.
pub fn invocation_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Extract the token from an `Authorization: Bearer <token>` value.
///
/// The scheme is matched case-insensitively; empty tokens are rejected.
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
