//! The default audit logger and its output plumbing.
//!
//! - [`DefaultLogger`] - Writes one line per violation to its error sink
//! - [`Sink`] - Buffered, mutex-guarded output destination
//! - [`format_event`] - The colon-delimited record format
//! - [`CaptureWriter`] - In-memory writer for tests

pub mod capture;
pub mod default_logger;
pub mod format;
pub mod sink;

pub use capture::{CaptureHandle, CaptureWriter};
pub use default_logger::DefaultLogger;
pub use format::{format_event, EventLine};
pub use sink::{Sink, SinkRole};
