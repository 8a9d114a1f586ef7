//! Domain layer for nostalgiaTok.
//!
//! Holds the session model and its stored-record codec, the deterministic
//! shape generator, locale tables, the swipe classifier and the repository
//! traits implemented by `nostalgia-infrastructure`. Nothing here performs I/O.

pub mod config;
pub mod error;
pub mod install_mode;
pub mod locale;
pub mod session;
pub mod shape;
pub mod swipe;
pub mod user;

// Re-export common error types
pub use error::{NostalgiaError, StoreError};
