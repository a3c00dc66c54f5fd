//! Error types for auditline operations.
//!
//! This module defines [`AuditError`], the error type returned by every
//! listener callback and by the replay and configuration layers, and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Failures surface synchronously to the immediate caller; nothing is retried
//! - Use `AuditError` for conditions callers may want to match on
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::logger::SinkRole;

/// Core error type for auditline operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A sink was written to after the session that owned it finished.
    #[error("The {sink} sink is closed")]
    SinkClosed { sink: SinkRole },

    /// Event input could not be decoded as UTF-8.
    #[error("Invalid encoding: {message}")]
    Encoding { message: String },

    /// A JSON-lines event record could not be parsed.
    #[error("Invalid event on line {line}: {message}")]
    EventParse { line: usize, message: String },

    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for auditline operations.
pub type Result<T> = std::result::Result<T, AuditError>;
