//! Fan-out of audit callbacks to several listeners.

use std::error::Error;

use super::AuditListener;
use crate::error::Result;
use crate::event::AuditEvent;

/// An ordered collection of listeners receiving every callback.
///
/// Callbacks are delivered in registration order. Delivery stops at the
/// first listener that fails, and its error is returned, except for
/// `session_finished`, which reaches every listener so each can release
/// its sinks; the first error is returned after all have run.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Box<dyn AuditListener>>,
}

impl ListenerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener after those already registered.
    pub fn add(&mut self, listener: Box<dyn AuditListener>) {
        self.listeners.push(listener);
    }

    /// Builder form of [`add`](Self::add).
    pub fn with(mut self, listener: Box<dyn AuditListener>) -> Self {
        self.add(listener);
        self
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn each(&self, mut call: impl FnMut(&dyn AuditListener) -> Result<()>) -> Result<()> {
        self.listeners
            .iter()
            .try_for_each(|listener| call(listener.as_ref()))
    }
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AuditListener for ListenerSet {
    fn session_started(&self, event: &AuditEvent) -> Result<()> {
        self.each(|l| l.session_started(event))
    }

    fn file_started(&self, event: &AuditEvent) -> Result<()> {
        self.each(|l| l.file_started(event))
    }

    fn file_finished(&self, event: &AuditEvent) -> Result<()> {
        self.each(|l| l.file_finished(event))
    }

    fn session_finished(&self, event: &AuditEvent) -> Result<()> {
        self.listeners
            .iter()
            .map(|listener| listener.session_finished(event))
            .fold(Ok(()), |first, result| first.and(result))
    }

    fn report_violation(&self, event: &AuditEvent) -> Result<()> {
        self.each(|l| l.report_violation(event))
    }

    fn report_violation_with_exception(
        &self,
        event: &AuditEvent,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        self.each(|l| l.report_violation_with_exception(event, cause))
    }
}
