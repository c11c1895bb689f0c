mod error;
mod functions;
mod headers;
mod http_mapping;
mod policy;
mod traits;
mod types;

pub use error::AuthError;
pub use functions::{invocation_timestamp, parse_bearer};
pub use headers::{
    MIDDLEWARE_CACHE_HEADER, MIDDLEWARE_CACHE_VALUE, MIDDLEWARE_INVOKED_HEADER,
    MIDDLEWARE_INVOKED_VALUE, MIDDLEWARE_TIME_HEADER, USER_EMAIL_HEADER, USER_ID_HEADER,
    USER_ROLE_HEADER,
};
pub use http_mapping::auth_error_to_status_code;
pub use policy::{decide, AdminRoutes, Decision, FailurePolicy, PathPolicy};
pub use traits::{Result, SessionStore};
pub use types::{Credentials, Identity, Session, DEFAULT_ROLE};
