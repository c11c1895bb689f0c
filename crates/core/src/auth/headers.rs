//! Response header names attached by the auth context resolver.
//!
//! Downstream rendering code reads these, so the names are a public contract.

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_EMAIL_HEADER: &str = "x-user-email";
pub const USER_ROLE_HEADER: &str = "x-user-role";

pub const MIDDLEWARE_CACHE_HEADER: &str = "x-middleware-cache";
pub const MIDDLEWARE_CACHE_VALUE: &str = "no-cache";

pub const MIDDLEWARE_INVOKED_HEADER: &str = "x-middleware-invoked";
pub const MIDDLEWARE_INVOKED_VALUE: &str = "true";

/// Carries the RFC 3339 time the resolver was invoked.
pub const MIDDLEWARE_TIME_HEADER: &str = "x-middleware-time";
