//! Severity levels for audit events.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of an audit event, ordered from least to most important.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Suppressed finding, never reported.
    #[serde(alias = "IGNORE")]
    Ignore,
    /// Informational finding.
    #[serde(alias = "INFO")]
    Info,
    /// Finding that should be addressed.
    #[serde(alias = "WARNING")]
    Warning,
    /// Finding that fails the check.
    #[default]
    #[serde(alias = "ERROR")]
    Error,
}

impl SeverityLevel {
    /// All levels in ascending order.
    pub const ALL: [SeverityLevel; 4] = [
        SeverityLevel::Ignore,
        SeverityLevel::Info,
        SeverityLevel::Warning,
        SeverityLevel::Error,
    ];

    /// The upper-case name written into log lines.
    pub fn name(self) -> &'static str {
        match self {
            SeverityLevel::Ignore => "IGNORE",
            SeverityLevel::Info => "INFO",
            SeverityLevel::Warning => "WARNING",
            SeverityLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known severity level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity level '{0}' (expected ignore, info, warning or error)")]
pub struct ParseSeverityError(pub String);

impl FromStr for SeverityLevel {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeverityLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}
