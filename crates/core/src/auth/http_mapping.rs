//! Pure mapping from session lookup errors to HTTP status codes.
//!
//! Only consulted when the resolver runs fail-closed; fail-open swallows
//! these errors entirely.

use super::AuthError;

/// Maps an [`AuthError`] to the status returned to a fail-closed client.
///
/// - `Unavailable` -> 503 (Service Unavailable)
/// - `Timeout` -> 504 (Gateway Timeout)
/// - `InvalidResponse` -> 502 (Bad Gateway)
/// - `Rejected` -> 502 (Bad Gateway)
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use atelier_core::auth::{auth_error_to_status_code, AuthError};
///
/// let error = AuthError::Timeout(Duration::from_secs(2));
/// assert_eq!(auth_error_to_status_code(&error), 504);
/// ```
pub fn auth_error_to_status_code(error: &AuthError) -> u16 {
    match error {
        AuthError::Unavailable(_) => 503,
        AuthError::Timeout(_) => 504,
        AuthError::InvalidResponse(_) => 502,
        AuthError::Rejected { .. } => 502,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unavailable_maps_to_503() {
        let error = AuthError::Unavailable("connection refused".to_string());
        assert_eq!(auth_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_timeout_maps_to_504() {
        let error = AuthError::Timeout(Duration::from_millis(250));
        assert_eq!(auth_error_to_status_code(&error), 504);
    }

    #[test]
    fn test_upstream_garbage_maps_to_502() {
        assert_eq!(
            auth_error_to_status_code(&AuthError::InvalidResponse("eof".to_string())),
            502
        );
        assert_eq!(
            auth_error_to_status_code(&AuthError::Rejected { status: 500 }),
            502
        );
    }
}
