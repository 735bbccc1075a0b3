//! Error types for the edges of the pool: key parsing and configuration.
//!
//! The pool operations themselves are total and never produce these.

use thiserror::Error;

/// Errors produced while building keys or pools.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// A full name could not be split into namespace and name.
    #[error("invalid pod key: {0}")]
    InvalidKey(String),
    /// Configuration failed to parse or validate.
    #[error("config error: {0}")]
    Config(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
