//! The audit event record.
//!
//! An [`AuditEvent`] is built by the checking engine for each finding and
//! lifecycle notification, passed by reference to every listener, and
//! never retained by them.

use serde::{Deserialize, Serialize};

use super::severity::SeverityLevel;

/// A single diagnostic finding or lifecycle notification.
///
/// Line and column are signed and 1-based; `0` means "not applicable".
/// Values are carried as given, without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditEvent {
    /// File the finding belongs to (empty for session-level events).
    #[serde(rename = "file")]
    pub file_name: String,
    /// Line number, `0` when not applicable.
    pub line: i64,
    /// Column number, `0` when not applicable.
    pub column: i64,
    /// Name of the rule or check that raised the finding.
    #[serde(rename = "source")]
    pub source_name: String,
    /// Severity of the finding.
    pub severity: SeverityLevel,
    /// Human-readable message.
    pub message: String,
}

impl AuditEvent {
    /// Create an event for a file with no location and no source.
    pub fn new(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Create a lifecycle event carrying only a file name.
    pub fn for_file(file_name: impl Into<String>) -> Self {
        Self::new(file_name, "")
    }

    /// Set the line and column.
    pub fn with_location(mut self, line: i64, column: i64) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Set the name of the rule that raised this event.
    pub fn with_source(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: SeverityLevel) -> Self {
        self.severity = severity;
        self
    }
}
