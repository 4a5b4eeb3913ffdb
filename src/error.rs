//! Error types for verification.
//!
//! This module defines [`VerifyError`], the error type used by every
//! fallible operation in the crate, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Checks never return errors: they convert failures into a printed
//!   warning and a `false` outcome
//! - `VerifyError` is used below the checks (process spawning, probe
//!   parsing, config loading) so callers can match on the cause
//! - `anyhow::Error` (via `VerifyError::Other`) carries ad-hoc parse context

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but holds invalid values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An external tool could not be launched because it is not installed.
    #[error("'{tool}' not found on PATH")]
    ToolNotFound { tool: String },

    /// External command ran but exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// External command produced output we could not interpret.
    #[error("Unexpected output from '{command}': {message}")]
    ProbeOutput { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
