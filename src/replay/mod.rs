//! Replaying recorded audit events through a listener.
//!
//! Input is JSON lines, one [`AuditEvent`] object per line, with an
//! optional `exception` field holding the text of a failure:
//!
//! ```text
//! {"file":"Foo.java","line":10,"column":5,"source":"Indentation","severity":"warning","message":"bad indent"}
//! {"file":"Bar.java","source":"TreeWalker","message":"parse failed","exception":"unexpected token"}
//! ```
//!
//! [`replay`] drives a whole session: `session_started`, a
//! `file_started`/`file_finished` pair around each run of records for the
//! same file, one report per record, then `session_finished`.
//!
//! # Example
//!
//! ```
//! use auditline::logger::{CaptureWriter, DefaultLogger};
//! use auditline::replay::replay;
//!
//! let input = r#"{"file":"A.java","line":1,"column":2,"source":"R","severity":"info","message":"m"}"#;
//! let (writer, handle) = CaptureWriter::new();
//! let logger = DefaultLogger::new(writer, true);
//!
//! let summary = replay(input.as_bytes(), &logger).unwrap();
//!
//! assert_eq!(summary.files, 1);
//! assert_eq!(handle.contents(), "A.java:1:2::R:INFO:m\n");
//! ```

use std::io::{self, BufRead};

use serde::Deserialize;

use crate::error::{AuditError, Result};
use crate::event::{AuditEvent, SeverityLevel};
use crate::listener::AuditListener;

/// Failure text attached to a recorded event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ReportedCause(pub String);

#[derive(Debug, Deserialize)]
struct EventRecord {
    #[serde(flatten)]
    event: AuditEvent,
    #[serde(default)]
    exception: Option<String>,
}

/// Counts gathered while replaying a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Number of file sections (runs of consecutive records for one file).
    pub files: usize,
    /// Records of severity `IGNORE`.
    pub ignored: usize,
    /// Records of severity `INFO`.
    pub infos: usize,
    /// Records of severity `WARNING`.
    pub warnings: usize,
    /// Records of severity `ERROR`.
    pub errors: usize,
    /// Records carrying an exception.
    pub exceptions: usize,
}

impl ReplaySummary {
    /// Total number of records replayed.
    pub fn total(&self) -> usize {
        self.ignored + self.infos + self.warnings + self.errors
    }

    /// Whether any `ERROR` record was replayed.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    fn count(&mut self, severity: SeverityLevel) {
        match severity {
            SeverityLevel::Ignore => self.ignored += 1,
            SeverityLevel::Info => self.infos += 1,
            SeverityLevel::Warning => self.warnings += 1,
            SeverityLevel::Error => self.errors += 1,
        }
    }
}

/// Replay JSON-lines events from `reader` as one audit session.
///
/// The session is finished even when reading or reporting fails part way;
/// the first error is returned.
pub fn replay<R: BufRead>(reader: R, listener: &dyn AuditListener) -> Result<ReplaySummary> {
    let session = AuditEvent::default();
    listener.session_started(&session)?;
    tracing::debug!("replay session started");

    let outcome = replay_records(reader, listener);
    let finished = listener.session_finished(&session);

    let summary = outcome?;
    finished?;
    tracing::debug!(
        files = summary.files,
        records = summary.total(),
        "replay session finished"
    );
    Ok(summary)
}

fn replay_records<R: BufRead>(reader: R, listener: &dyn AuditListener) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    let mut current_file: Option<String> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| read_error(e, index + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: EventRecord =
            serde_json::from_str(&line).map_err(|e| AuditError::EventParse {
                line: index + 1,
                message: e.to_string(),
            })?;
        let event = record.event;

        if current_file.as_deref() != Some(event.file_name.as_str()) {
            if let Some(previous) = current_file.take() {
                listener.file_finished(&AuditEvent::for_file(previous))?;
            }
            tracing::debug!(file = %event.file_name, "file started");
            listener.file_started(&AuditEvent::for_file(event.file_name.as_str()))?;
            current_file = Some(event.file_name.clone());
            summary.files += 1;
        }

        match record.exception {
            Some(text) => {
                listener.report_violation_with_exception(&event, &ReportedCause(text))?;
                summary.exceptions += 1;
            }
            None => listener.report_violation(&event)?,
        }
        summary.count(event.severity);
    }

    if let Some(previous) = current_file {
        listener.file_finished(&AuditEvent::for_file(previous))?;
    }
    Ok(summary)
}

fn read_error(err: io::Error, line: usize) -> AuditError {
    if err.kind() == io::ErrorKind::InvalidData {
        AuditError::Encoding {
            message: format!("line {line} is not valid UTF-8"),
        }
    } else {
        AuditError::Io(err)
    }
}
