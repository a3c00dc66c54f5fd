//! Audit events reported by a checking engine.
//!
//! - [`AuditEvent`] - A single finding with location, source and message
//! - [`SeverityLevel`] - Ordered importance of a finding

pub mod audit_event;
pub mod severity;

pub use audit_event::AuditEvent;
pub use severity::{ParseSeverityError, SeverityLevel};
