//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, or `std::process`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors in the loaded or overridden configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid unit name '{0}': use letters, digits and ':-_.\\@' only")]
    InvalidUnit(String),

    #[error("No file extensions configured for deploy")]
    NoExtensions,

    #[error("Invalid extension '{0}': give the extension without a leading dot")]
    InvalidExtension(String),
}

// ── Deploy errors ─────────────────────────────────────────────────────────────

/// Errors raised while planning or executing a deploy.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("No matching source files in {dir} (extensions: {extensions})")]
    NoSources { dir: PathBuf, extensions: String },

    #[error("Cannot copy {from} to {to}")]
    CopyFailed { from: PathBuf, to: PathBuf },
}

// ── Command errors ────────────────────────────────────────────────────────────

/// Errors raised when an external program cannot be started.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{program}: command not found")]
    NotFound { program: String },
}
