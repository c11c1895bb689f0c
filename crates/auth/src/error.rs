use atelier_core::{auth::auth_error_to_status_code, paths::PatternError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Auth errors for the atelier_auth crate.
///
/// Wraps the core `AuthError` and adds the configuration failures that only
/// happen while wiring the resolver up.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the session store (lookup, timeout, bad response).
    #[error(transparent)]
    Core(#[from] atelier_core::auth::AuthError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<PatternError> for AuthError {
    fn from(err: PatternError) -> Self {
        AuthError::Config(err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::Core(core_err) => {
                tracing::error!(error = %core_err, "Session lookup failed, refusing request");
                let status = StatusCode::from_u16(auth_error_to_status_code(core_err))
                    .unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
                (status, "Authentication service unavailable")
            }
            AuthError::Config(_) => {
                tracing::error!("Config error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error",
                )
            }
        };

        (status, message).into_response()
    }
}
