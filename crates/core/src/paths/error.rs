use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("empty path pattern")]
    Empty,

    #[error("path pattern '{0}' must start with '/' or '^'")]
    NotAbsolute(String),

    #[error("invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
