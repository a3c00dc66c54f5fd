//! Audit listener callbacks.
//!
//! A checking engine drives a session through an [`AuditListener`]:
//!
//! 1. `session_started` once
//! 2. for each file, `file_started`, any number of reports, `file_finished`
//! 3. `session_finished` once
//!
//! Listeners are shared across the engine's threads, so every callback
//! takes `&self`.
//!
//! - [`ListenerSet`] - Fans each callback out to several listeners
//! - [`SeverityFilter`] - Drops reports below a severity threshold

pub mod filter;
pub mod set;

pub use filter::SeverityFilter;
pub use set::ListenerSet;

use std::error::Error;
use std::sync::Arc;

use crate::error::Result;
use crate::event::AuditEvent;

/// Receiver of audit session callbacks.
pub trait AuditListener: Send + Sync {
    /// The audit session has begun.
    fn session_started(&self, event: &AuditEvent) -> Result<()>;

    /// Checking of `event.file_name` has begun.
    fn file_started(&self, event: &AuditEvent) -> Result<()>;

    /// Checking of `event.file_name` has ended.
    fn file_finished(&self, event: &AuditEvent) -> Result<()>;

    /// The audit session has ended; no further callbacks follow.
    fn session_finished(&self, event: &AuditEvent) -> Result<()>;

    /// A violation was found.
    fn report_violation(&self, event: &AuditEvent) -> Result<()>;

    /// Checking failed with `cause` while producing `event`.
    fn report_violation_with_exception(
        &self,
        event: &AuditEvent,
        cause: &(dyn Error + 'static),
    ) -> Result<()>;
}

impl<L: AuditListener + ?Sized> AuditListener for Box<L> {
    fn session_started(&self, event: &AuditEvent) -> Result<()> {
        (**self).session_started(event)
    }

    fn file_started(&self, event: &AuditEvent) -> Result<()> {
        (**self).file_started(event)
    }

    fn file_finished(&self, event: &AuditEvent) -> Result<()> {
        (**self).file_finished(event)
    }

    fn session_finished(&self, event: &AuditEvent) -> Result<()> {
        (**self).session_finished(event)
    }

    fn report_violation(&self, event: &AuditEvent) -> Result<()> {
        (**self).report_violation(event)
    }

    fn report_violation_with_exception(
        &self,
        event: &AuditEvent,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        (**self).report_violation_with_exception(event, cause)
    }
}

impl<L: AuditListener + ?Sized> AuditListener for Arc<L> {
    fn session_started(&self, event: &AuditEvent) -> Result<()> {
        (**self).session_started(event)
    }

    fn file_started(&self, event: &AuditEvent) -> Result<()> {
        (**self).file_started(event)
    }

    fn file_finished(&self, event: &AuditEvent) -> Result<()> {
        (**self).file_finished(event)
    }

    fn session_finished(&self, event: &AuditEvent) -> Result<()> {
        (**self).session_finished(event)
    }

    fn report_violation(&self, event: &AuditEvent) -> Result<()> {
        (**self).report_violation(event)
    }

    fn report_violation_with_exception(
        &self,
        event: &AuditEvent,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        (**self).report_violation_with_exception(event, cause)
    }
}
