//! The default line-per-violation logger.

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::format::EventLine;
use super::sink::{Sink, SinkRole};
use crate::error::Result;
use crate::event::AuditEvent;
use crate::listener::AuditListener;

/// Where informational output goes.
#[derive(Debug)]
enum InfoOutput {
    /// The info role uses the error sink's stream.
    Shared,
    /// A stream of its own, with its own close flag.
    Separate { sink: Sink, close: bool },
}

/// Writes one colon-delimited line per reported violation.
///
/// Lifecycle callbacks other than `session_finished` produce no output.
/// On `session_finished` the info sink and then the error sink are
/// flushed, and closed if the logger was told to close them. A stream
/// shared by both roles is released exactly once.
#[derive(Debug)]
pub struct DefaultLogger {
    error: Sink,
    close_error: bool,
    info: InfoOutput,
    render_causes: bool,
}

impl DefaultLogger {
    /// Log infos and errors to one stream, closing it on session end if
    /// `close_after_use` is set.
    pub fn new<W>(stream: W, close_after_use: bool) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            error: Sink::new(SinkRole::Error, stream),
            close_error: close_after_use,
            info: InfoOutput::Shared,
            render_causes: false,
        }
    }

    /// Log infos and errors to separate streams with independent close flags.
    pub fn with_streams<I, E>(info: I, close_info: bool, error: E, close_error: bool) -> Self
    where
        I: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            error: Sink::new(SinkRole::Error, error),
            close_error,
            info: InfoOutput::Separate {
                sink: Sink::new(SinkRole::Info, info),
                close: close_info,
            },
            render_causes: false,
        }
    }

    /// Log to a newly created file, closed on session end.
    pub fn to_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(file, true))
    }

    /// Log infos and errors to two newly created files, both closed on
    /// session end.
    pub fn to_paths(info: impl AsRef<Path>, error: impl AsRef<Path>) -> Result<Self> {
        let info = File::create(info.as_ref())?;
        let error = File::create(error.as_ref())?;
        Ok(Self::with_streams(info, true, error, true))
    }

    /// Also write the cause chain of reported exceptions, one
    /// `\tcaused by: ...` line per cause, after the record line.
    pub fn with_cause_rendering(mut self, enabled: bool) -> Self {
        self.render_causes = enabled;
        self
    }

    /// Whether info and error output share one stream.
    pub fn shares_stream(&self) -> bool {
        matches!(self.info, InfoOutput::Shared)
    }

    /// Flush both sinks and close those marked for closing.
    ///
    /// Both sinks are released even if the first fails; the first error
    /// is returned.
    fn close_streams(&self) -> Result<()> {
        let info = match &self.info {
            InfoOutput::Shared => Ok(()),
            InfoOutput::Separate { sink, close } => sink.release(*close),
        };
        let error = self.error.release(self.close_error);
        info.and(error)
    }
}

impl AuditListener for DefaultLogger {
    fn session_started(&self, _event: &AuditEvent) -> Result<()> {
        Ok(())
    }

    fn file_started(&self, _event: &AuditEvent) -> Result<()> {
        Ok(())
    }

    fn file_finished(&self, _event: &AuditEvent) -> Result<()> {
        Ok(())
    }

    fn session_finished(&self, _event: &AuditEvent) -> Result<()> {
        tracing::debug!(shared = self.shares_stream(), "audit session finished");
        self.close_streams()
    }

    fn report_violation(&self, event: &AuditEvent) -> Result<()> {
        self.error.write_record(&EventLine(event).to_string())
    }

    fn report_violation_with_exception(
        &self,
        event: &AuditEvent,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        tracing::warn!(
            file = %event.file_name,
            source = %event.source_name,
            "exception while checking: {}",
            cause
        );

        let mut record = EventLine(event).to_string();
        if self.render_causes {
            let mut current = Some(cause);
            while let Some(err) = current {
                record.push_str("\n\tcaused by: ");
                record.push_str(&err.to_string());
                current = err.source();
            }
        }
        self.error.write_record(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuditError;
    use crate::event::SeverityLevel;
    use crate::logger::CaptureWriter;
    use std::fmt;

    fn example() -> AuditEvent {
        AuditEvent::new("Foo.java", "bad indent")
            .with_location(10, 5)
            .with_source("checkstyle.rules.Example")
            .with_severity(SeverityLevel::Warning)
    }

    fn finish(logger: &DefaultLogger) {
        logger.session_finished(&AuditEvent::default()).unwrap();
    }

    #[derive(Debug)]
    struct Wrapped {
        message: &'static str,
        source: Option<std::io::Error>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.source.as_ref().map(|e| e as &(dyn Error + 'static))
        }
    }

    #[test]
    fn writes_exact_violation_line() {
        let (writer, handle) = CaptureWriter::new();
        let logger = DefaultLogger::new(writer, false);

        logger.report_violation(&example()).unwrap();
        finish(&logger);

        assert_eq!(
            handle.contents(),
            "Foo.java:10:5::checkstyle.rules.Example:WARNING:bad indent\n"
        );
    }

    #[test]
    fn zero_column_is_written() {
        let (writer, handle) = CaptureWriter::new();
        let logger = DefaultLogger::new(writer, false);

        logger
            .report_violation(&example().with_location(1, 0))
            .unwrap();
        finish(&logger);

        assert_eq!(
            handle.lines()[0],
            "Foo.java:1:0::checkstyle.rules.Example:WARNING:bad indent"
        );
    }

    #[test]
    fn violation_is_not_flushed() {
        let (writer, handle) = CaptureWriter::new();
        let logger = DefaultLogger::new(writer, false);

        logger.report_violation(&example()).unwrap();

        assert_eq!(handle.flush_count(), 0);
        assert_eq!(handle.contents(), "");
    }

    #[test]
    fn exception_writes_same_line_by_default() {
        let (writer, handle) = CaptureWriter::new();
        let logger = DefaultLogger::new(writer, false);
        let cause = std::io::Error::other("unexpected end of file");

        logger
            .report_violation_with_exception(&example(), &cause)
            .unwrap();
        finish(&logger);

        assert_eq!(
            handle.contents(),
            "Foo.java:10:5::checkstyle.rules.Example:WARNING:bad indent\n"
        );
    }

    #[test]
    fn exception_renders_cause_chain_when_enabled() {
        let (writer, handle) = CaptureWriter::new();
        let logger = DefaultLogger::new(writer, false).with_cause_rendering(true);
        let cause = Wrapped {
            message: "could not parse Foo.java",
            source: Some(std::io::Error::other("unexpected end of file")),
        };

        logger
            .report_violation_with_exception(&example(), &cause)
            .unwrap();
        finish(&logger);

        assert_eq!(
            handle.lines(),
            vec![
                "Foo.java:10:5::checkstyle.rules.Example:WARNING:bad indent",
                "\tcaused by: could not parse Foo.java",
                "\tcaused by: unexpected end of file",
            ]
        );
    }

    #[test]
    fn shared_stream_is_closed_exactly_once() {
        let (writer, handle) = CaptureWriter::new();
        let logger = DefaultLogger::new(writer, true);
        assert!(logger.shares_stream());

        finish(&logger);

        assert_eq!(handle.close_count(), 1);
        assert_eq!(handle.flush_count(), 1);
    }

    #[test]
    fn shared_stream_without_close_is_only_flushed() {
        let (writer, handle) = CaptureWriter::new();
        let logger = DefaultLogger::new(writer, false);

        logger.report_violation(&example()).unwrap();
        finish(&logger);

        assert_eq!(handle.close_count(), 0);
        assert_eq!(handle.flush_count(), 1);
        assert_eq!(handle.lines().len(), 1);
    }

    #[test]
    fn separate_streams_flush_both_close_error_only() {
        let (info, info_handle) = CaptureWriter::new();
        let (error, error_handle) = CaptureWriter::new();
        let logger = DefaultLogger::with_streams(info, false, error, true);
        assert!(!logger.shares_stream());

        finish(&logger);

        assert_eq!(info_handle.flush_count(), 1);
        assert_eq!(error_handle.flush_count(), 1);
        assert_eq!(info_handle.close_count(), 0);
        assert_eq!(error_handle.close_count(), 1);
    }

    #[test]
    fn violations_go_to_error_stream_only() {
        let (info, info_handle) = CaptureWriter::new();
        let (error, error_handle) = CaptureWriter::new();
        let logger = DefaultLogger::with_streams(info, true, error, true);

        logger.report_violation(&example()).unwrap();
        finish(&logger);

        assert_eq!(info_handle.contents(), "");
        assert_eq!(error_handle.lines().len(), 1);
    }

    #[test]
    fn lifecycle_callbacks_write_nothing() {
        let (info, info_handle) = CaptureWriter::new();
        let (error, error_handle) = CaptureWriter::new();
        let logger = DefaultLogger::with_streams(info, false, error, false);
        let file = AuditEvent::for_file("Foo.java");

        logger.session_started(&AuditEvent::default()).unwrap();
        logger.file_started(&file).unwrap();
        logger.file_finished(&file).unwrap();
        finish(&logger);

        assert_eq!(info_handle.write_count(), 0);
        assert_eq!(error_handle.write_count(), 0);
    }

    #[test]
    fn reporting_after_session_end_fails() {
        let (writer, _handle) = CaptureWriter::new();
        let logger = DefaultLogger::new(writer, false);
        finish(&logger);

        let err = logger.report_violation(&example()).unwrap_err();
        assert!(matches!(
            err,
            AuditError::SinkClosed {
                sink: SinkRole::Error
            }
        ));

        let cause = std::io::Error::other("late");
        assert!(logger
            .report_violation_with_exception(&example(), &cause)
            .is_err());
    }

    #[test]
    fn failed_flush_still_closes_both_streams() {
        let (info, info_handle) = CaptureWriter::new();
        let (error, error_handle) = CaptureWriter::new();
        let logger = DefaultLogger::with_streams(info, true, error, true);

        error_handle.fail_writes();
        logger.report_violation(&example()).unwrap();

        let err = logger
            .session_finished(&AuditEvent::default())
            .unwrap_err();
        assert!(matches!(err, AuditError::Io(_)));
        assert_eq!(info_handle.close_count(), 1);
        assert_eq!(error_handle.close_count(), 1);
    }

    struct PanickingWriter;

    impl Write for PanickingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            panic!("writer exploded");
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn poisoned_sink_reports_io_error() {
        let logger = DefaultLogger::new(PanickingWriter, true);
        logger.report_violation(&example()).unwrap();

        let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.session_finished(&AuditEvent::default())
        }));
        assert!(panicked.is_err());

        let err = logger.report_violation(&example()).unwrap_err();
        assert!(matches!(err, AuditError::Io(_)));
        assert!(err.to_string().contains("poisoned"));

        let err = logger
            .session_finished(&AuditEvent::default())
            .unwrap_err();
        assert!(matches!(err, AuditError::Io(_)));
    }

    #[test]
    fn concurrent_reports_produce_whole_lines() {
        let (writer, handle) = CaptureWriter::new();
        let logger = DefaultLogger::new(writer, true);
        let threads = 8;
        let per_thread = 200;

        std::thread::scope(|scope| {
            for t in 0..threads {
                let logger = &logger;
                scope.spawn(move || {
                    for i in 0..per_thread {
                        let event = AuditEvent::new(format!("T{t}.java"), format!("message {i}"))
                            .with_location(i, t)
                            .with_source("checkstyle.rules.Concurrency");
                        logger.report_violation(&event).unwrap();
                    }
                });
            }
        });
        finish(&logger);

        let lines = handle.lines();
        assert_eq!(lines.len(), (threads * per_thread) as usize);
        for line in &lines {
            let fields: Vec<&str> = line.splitn(7, ':').collect();
            assert_eq!(fields.len(), 7, "malformed line: {line}");
            assert_eq!(fields[3], "");
            assert_eq!(fields[4], "checkstyle.rules.Concurrency");
            assert_eq!(fields[5], "ERROR");
            assert!(fields[6].starts_with("message "));
        }
    }

    #[test]
    fn to_path_writes_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("report.txt");
        let logger = DefaultLogger::to_path(&path).unwrap();

        logger.report_violation(&example()).unwrap();
        finish(&logger);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Foo.java:10:5::checkstyle.rules.Example:WARNING:bad indent\n"
        );
    }

    #[test]
    fn to_path_fails_for_missing_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing").join("report.txt");

        let err = DefaultLogger::to_path(&path).unwrap_err();
        assert!(matches!(err, AuditError::Io(_)));
    }
}
