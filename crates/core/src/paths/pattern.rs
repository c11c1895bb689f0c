use std::str::FromStr;

use regex::Regex;

use super::PatternError;

/// A single request path matcher.
///
/// Parsed from a compact string form:
/// - `^...` is an anchored regular expression
/// - a trailing `*` makes a prefix match (`/admin*`)
/// - anything else must equal the path exactly (`/favicon.ico`)
#[derive(Debug, Clone)]
pub enum PathPattern {
    Exact(String),
    Prefix(String),
    Regex(Regex),
}

impl PathPattern {
    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => path == expected,
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
            Self::Regex(re) => re.is_match(path),
        }
    }
}

impl FromStr for PathPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        if s.starts_with('^') {
            return Regex::new(s)
                .map(Self::Regex)
                .map_err(|source| PatternError::InvalidRegex {
                    pattern: s.to_string(),
                    source,
                });
        }

        if !s.starts_with('/') {
            return Err(PatternError::NotAbsolute(s.to_string()));
        }

        match s.strip_suffix('*') {
            Some(prefix) => Ok(Self::Prefix(prefix.to_string())),
            None => Ok(Self::Exact(s.to_string())),
        }
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(path) => write!(f, "{path}"),
            Self::Prefix(prefix) => write!(f, "{prefix}*"),
            Self::Regex(re) => write!(f, "{}", re.as_str()),
        }
    }
}
