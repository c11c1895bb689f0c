//! Session store implementations.
//!
//! Provides `SessionStore` implementations for:
//! - The remote auth service (always available)
//! - In-memory (with `mock` feature)

#[cfg(any(test, feature = "mock"))]
mod inmemory;
mod remote;

#[cfg(any(test, feature = "mock"))]
pub use inmemory::InMemorySessionStore;
pub use remote::RemoteSessionStore;
