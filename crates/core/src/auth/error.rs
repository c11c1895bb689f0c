use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),

    #[error("session lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid session store response: {0}")]
    InvalidResponse(String),

    #[error("session store rejected the request with status {status}")]
    Rejected { status: u16 },
}
