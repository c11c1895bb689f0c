//! Axum extractors for the identity resolved by the auth context middleware.

use std::convert::Infallible;

use atelier_core::auth::Identity;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

use crate::middleware::AuthContext;

/// Extractor for an identified caller. Returns 401 if anonymous.
///
/// The identity is a hint: it comes from the resolver, which fails open.
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .and_then(|ctx| ctx.identity.clone())
            .map(CurrentIdentity)
            .ok_or((StatusCode::UNAUTHORIZED, "Not authenticated"))
    }
}

/// Extractor for an optionally identified caller. Returns None if anonymous
/// or if the resolver did not run for this path.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<AuthContext>()
            .and_then(|ctx| ctx.identity.clone());
        Ok(OptionalIdentity(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::Utc;

    fn parts_with(context: Option<AuthContext>) -> Parts {
        let mut request = Request::builder().uri("/").body(()).unwrap();
        if let Some(context) = context {
            request.extensions_mut().insert(context);
        }
        request.into_parts().0
    }

    fn identity() -> Identity {
        Identity {
            user_id: "u1".to_string(),
            email: "a@b.com".to_string(),
            role: "user".to_string(),
        }
    }

    #[tokio::test]
    async fn current_identity_reads_context() {
        let mut parts = parts_with(Some(AuthContext {
            identity: Some(identity()),
            invoked_at: Utc::now(),
        }));

        let CurrentIdentity(found) = CurrentIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(found, identity());
    }

    #[tokio::test]
    async fn current_identity_rejects_anonymous() {
        let mut parts = parts_with(Some(AuthContext {
            identity: None,
            invoked_at: Utc::now(),
        }));

        let result = CurrentIdentity::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err((StatusCode::UNAUTHORIZED, _))));
    }

    #[tokio::test]
    async fn optional_identity_without_resolver_is_none() {
        let mut parts = parts_with(None);

        let OptionalIdentity(found) = OptionalIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
