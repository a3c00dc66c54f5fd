//! Severity-threshold filtering of reports.

use std::error::Error;

use super::AuditListener;
use crate::error::Result;
use crate::event::{AuditEvent, SeverityLevel};

/// Forwards callbacks to an inner listener, dropping low-severity reports.
///
/// Lifecycle callbacks always pass through. Reports pass when their
/// severity is at least the threshold; `IGNORE` reports never pass.
#[derive(Debug)]
pub struct SeverityFilter<L> {
    inner: L,
    minimum: SeverityLevel,
}

impl<L: AuditListener> SeverityFilter<L> {
    /// Wrap `inner`, forwarding reports at `minimum` or above.
    pub fn new(inner: L, minimum: SeverityLevel) -> Self {
        Self { inner, minimum }
    }

    /// The lowest severity forwarded.
    pub fn minimum(&self) -> SeverityLevel {
        self.minimum
    }

    /// The wrapped listener.
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Whether a report of `event` would reach the inner listener.
    pub fn accepts(&self, event: &AuditEvent) -> bool {
        event.severity != SeverityLevel::Ignore && event.severity >= self.minimum
    }
}

impl<L: AuditListener> AuditListener for SeverityFilter<L> {
    fn session_started(&self, event: &AuditEvent) -> Result<()> {
        self.inner.session_started(event)
    }

    fn file_started(&self, event: &AuditEvent) -> Result<()> {
        self.inner.file_started(event)
    }

    fn file_finished(&self, event: &AuditEvent) -> Result<()> {
        self.inner.file_finished(event)
    }

    fn session_finished(&self, event: &AuditEvent) -> Result<()> {
        self.inner.session_finished(event)
    }

    fn report_violation(&self, event: &AuditEvent) -> Result<()> {
        if !self.accepts(event) {
            return Ok(());
        }
        self.inner.report_violation(event)
    }

    fn report_violation_with_exception(
        &self,
        event: &AuditEvent,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        if !self.accepts(event) {
            return Ok(());
        }
        self.inner.report_violation_with_exception(event, cause)
    }
}
