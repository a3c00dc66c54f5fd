//! In-memory writer for testing.
//!
//! `CaptureWriter` records everything written to it and counts flushes
//! and closes (a close is the writer being dropped). The paired
//! [`CaptureHandle`] stays with the test for assertions after the writer
//! has been handed to a logger.
//!
//! # Example
//!
//! ```
//! use auditline::logger::{CaptureWriter, DefaultLogger};
//! use auditline::{AuditEvent, AuditListener};
//!
//! let (writer, handle) = CaptureWriter::new();
//! let logger = DefaultLogger::new(writer, true);
//!
//! let event = AuditEvent::new("Foo.java", "bad indent").with_location(10, 5);
//! logger.report_violation(&event).unwrap();
//! logger.session_finished(&AuditEvent::default()).unwrap();
//!
//! assert_eq!(handle.contents(), "Foo.java:10:5:::ERROR:bad indent\n");
//! assert_eq!(handle.close_count(), 1);
//! ```

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Shared {
    buffer: Mutex<Vec<u8>>,
    writes: AtomicUsize,
    flushes: AtomicUsize,
    closes: AtomicUsize,
    failing: AtomicBool,
}

/// Writer that captures output in memory.
#[derive(Debug)]
pub struct CaptureWriter {
    shared: Arc<Shared>,
}

/// Inspection handle for a [`CaptureWriter`].
#[derive(Debug, Clone)]
pub struct CaptureHandle {
    shared: Arc<Shared>,
}

impl CaptureWriter {
    /// Create a writer and the handle used to inspect it.
    pub fn new() -> (Self, CaptureHandle) {
        let shared = Arc::new(Shared::default());
        (
            Self {
                shared: Arc::clone(&shared),
            },
            CaptureHandle { shared },
        )
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.shared.failing.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "capture writer failure"));
        }
        self.shared
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend_from_slice(buf);
        self.shared.writes.fetch_add(1, Ordering::SeqCst);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.shared.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Drop for CaptureWriter {
    fn drop(&mut self) {
        self.shared.closes.fetch_add(1, Ordering::SeqCst);
    }
}

impl CaptureHandle {
    /// Everything written so far, decoded as UTF-8.
    pub fn contents(&self) -> String {
        let buffer = self
            .shared
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Written output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Number of successful `write` calls that reached the writer.
    pub fn write_count(&self) -> usize {
        self.shared.writes.load(Ordering::SeqCst)
    }

    /// Number of `flush` calls that reached the writer.
    pub fn flush_count(&self) -> usize {
        self.shared.flushes.load(Ordering::SeqCst)
    }

    /// Number of times the writer was closed (dropped).
    pub fn close_count(&self) -> usize {
        self.shared.closes.load(Ordering::SeqCst)
    }

    /// Make every later write fail with `BrokenPipe`.
    pub fn fail_writes(&self) {
        self.shared.failing.store(true, Ordering::SeqCst);
    }
}
