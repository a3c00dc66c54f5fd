//! Lockable output sinks.
//!
//! A [`Sink`] owns a buffered writer behind its own mutex. Every write,
//! flush and release takes that lock, so lines written from several
//! threads never interleave, and writers to different sinks never block
//! each other.
//!
//! A sink is released exactly once at session end: either closed (the
//! writer is flushed and dropped) or left open for its owner (flushed and
//! kept, but no longer writable through the sink).

use std::fmt;
use std::io::{self, BufWriter, Write};
use std::sync::{Mutex, MutexGuard};

use crate::error::{AuditError, Result};

/// Which logger output a sink serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkRole {
    /// Informational notifications.
    Info,
    /// Violation and exception records.
    Error,
}

impl fmt::Display for SinkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkRole::Info => write!(f, "info"),
            SinkRole::Error => write!(f, "error"),
        }
    }
}

type BoxedWriter = BufWriter<Box<dyn Write + Send>>;

enum SinkState {
    Open(BoxedWriter),
    /// Flushed and handed back to its owner; kept alive but not writable.
    Released(BoxedWriter),
    Closed,
}

/// A buffered, mutex-guarded output destination.
pub struct Sink {
    role: SinkRole,
    state: Mutex<SinkState>,
}

impl Sink {
    /// Wrap a writer for the given role.
    pub fn new<W>(role: SinkRole, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let boxed: Box<dyn Write + Send> = Box::new(writer);
        Self {
            role,
            state: Mutex::new(SinkState::Open(BufWriter::new(boxed))),
        }
    }

    /// Whether the sink still accepts writes.
    pub fn is_open(&self) -> bool {
        self.lock()
            .map(|state| matches!(*state, SinkState::Open(_)))
            .unwrap_or(false)
    }

    /// Write `text` followed by a newline as a single write.
    ///
    /// The sink is not flushed.
    pub fn write_record(&self, text: &str) -> Result<()> {
        let mut record = String::with_capacity(text.len() + 1);
        record.push_str(text);
        record.push('\n');

        let mut state = self.lock()?;
        match &mut *state {
            SinkState::Open(writer) => Ok(writer.write_all(record.as_bytes())?),
            SinkState::Released(_) | SinkState::Closed => {
                Err(AuditError::SinkClosed { sink: self.role })
            }
        }
    }

    /// Flush buffered output to the underlying writer.
    ///
    /// Flushing a released or closed sink does nothing.
    pub fn flush(&self) -> Result<()> {
        let mut state = self.lock()?;
        if let SinkState::Open(writer) = &mut *state {
            writer.flush()?;
        }
        Ok(())
    }

    /// Flush and end use of this sink, dropping the writer when `close` is set.
    ///
    /// Releasing an already released sink only closes it if it was kept
    /// open before and `close` is now set.
    pub fn release(&self, close: bool) -> Result<()> {
        let mut state = self.lock()?;
        let current = std::mem::replace(&mut *state, SinkState::Closed);
        let mut writer = match current {
            SinkState::Open(writer) | SinkState::Released(writer) => writer,
            SinkState::Closed => return Ok(()),
        };

        let flushed = writer.flush();
        if close {
            drop(writer);
            tracing::debug!(sink = %self.role, "closed sink");
        } else {
            *state = SinkState::Released(writer);
        }
        Ok(flushed?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, SinkState>> {
        self.state.lock().map_err(|_| {
            AuditError::Io(io::Error::other(format!(
                "{} sink lock poisoned by a panicking writer",
                self.role
            )))
        })
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("role", &self.role)
            .field("open", &self.is_open())
            .finish()
    }
}
