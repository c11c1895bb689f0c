//! Session lookups against the hosted auth service.
//!
//! The service exposes `GET /auth/v1/user`, authenticated with the project
//! API key and the user's access token, and answers with the user record.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use atelier_core::auth::{AuthError as CoreError, Credentials, Result, Session, SessionStore};

use crate::config::SessionStoreConfig;
use crate::error::AuthError;

const USER_ENDPOINT: &str = "auth/v1/user";

/// Session store backed by the remote auth service.
#[derive(Debug, Clone)]
pub struct RemoteSessionStore {
    client: reqwest::Client,
    user_url: Url,
    api_key: String,
}

/// User record returned by the auth service. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct UserRecord {
    id: String,
    email: Option<String>,
    user_metadata: Option<Metadata>,
    app_metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    role: Option<String>,
}

impl UserRecord {
    fn into_session(self) -> Result<Session> {
        if self.id.is_empty() {
            return Err(CoreError::InvalidResponse("user record without id".to_string()));
        }

        let role = self
            .user_metadata
            .and_then(|m| m.role)
            .or_else(|| self.app_metadata.and_then(|m| m.role));

        Ok(Session {
            user_id: self.id,
            email: self.email,
            role,
        })
    }
}

impl RemoteSessionStore {
    /// Creates a store with a fresh HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if the base URL cannot hold a path.
    pub fn new(config: &SessionStoreConfig) -> std::result::Result<Self, AuthError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a store sharing an existing HTTP client (and its pool).
    pub fn with_client(
        client: reqwest::Client,
        config: &SessionStoreConfig,
    ) -> std::result::Result<Self, AuthError> {
        let mut base = config.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let user_url = base
            .join(USER_ENDPOINT)
            .map_err(|e| AuthError::Config(format!("session store URL: {e}")))?;

        Ok(Self {
            client,
            user_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Endpoint queried for the current user.
    pub fn user_url(&self) -> &Url {
        &self.user_url
    }
}

#[async_trait]
impl SessionStore for RemoteSessionStore {
    async fn get_session(&self, credentials: &Credentials) -> Result<Option<Session>> {
        // No token, nothing to ask the service about.
        let Some(token) = credentials.access_token() else {
            return Ok(None);
        };

        let mut request = self.client.get(self.user_url.clone()).bearer_auth(token);
        if !self.api_key.is_empty() {
            request = request.header("apikey", &self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                tracing::debug!(status = status.as_u16(), "Session store rejected credentials");
                return Ok(None);
            }
            _ if !status.is_success() => {
                return Err(CoreError::Rejected {
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let record: UserRecord = response
            .json()
            .await
            .map_err(|e| CoreError::InvalidResponse(e.to_string()))?;

        record.into_session().map(Some)
    }
}
