//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they surface run-configuration problems.

use thiserror::Error;

/// Errors raised while validating core configuration values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `swarm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
