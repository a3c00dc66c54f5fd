//! auditline - Line-oriented audit event logging for code checkers.
//!
//! A checking engine reports its findings as [`AuditEvent`]s to an
//! [`AuditListener`]. The [`DefaultLogger`] renders each reported
//! violation as one colon-delimited line:
//!
//! ```text
//! <file>:<line>:<column>::<source>:<severity>:<message>
//! ```
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Logger configuration loading
//! - [`error`] - Error types and result aliases
//! - [`event`] - Audit events and severity levels
//! - [`listener`] - The listener trait, fan-out and filtering
//! - [`logger`] - The default logger and its sinks
//! - [`replay`] - Driving a session from recorded JSON-lines events
//!
//! # Example
//!
//! ```
//! use auditline::{AuditEvent, AuditListener, DefaultLogger, SeverityLevel};
//!
//! let logger = DefaultLogger::new(Vec::new(), false);
//! let event = AuditEvent::new("Foo.java", "bad indent")
//!     .with_location(10, 5)
//!     .with_source("checkstyle.rules.Example")
//!     .with_severity(SeverityLevel::Warning);
//!
//! logger.report_violation(&event).unwrap();
//! logger.session_finished(&AuditEvent::default()).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod listener;
pub mod logger;
pub mod replay;

pub use error::{AuditError, Result};
pub use event::{AuditEvent, SeverityLevel};
pub use listener::AuditListener;
pub use logger::DefaultLogger;
