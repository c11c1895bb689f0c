//! Path patterns deciding which requests bypass the auth context resolver.

mod error;
mod exclusion;
mod pattern;

pub use error::PatternError;
pub use exclusion::ExclusionSet;
pub use pattern::PathPattern;
