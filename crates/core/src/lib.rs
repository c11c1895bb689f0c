//! Functional core for the atelier site.
//!
//! Everything in here is free of I/O: session types and the store
//! abstraction, path patterns for the resolver exclusion set, and the pure
//! admin path policy.

pub mod auth;
pub mod paths;
