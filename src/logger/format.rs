//! The colon-delimited record format.
//!
//! Each violation is rendered as
//!
//! ```text
//! <file>:<line>:<column>::<source>:<severity>:<message>
//! ```
//!
//! Tools parse this output, so every field is always present, the empty
//! field after the column is kept, and values are printed exactly as
//! carried by the event.

use std::fmt;

use crate::event::AuditEvent;

/// Display adapter rendering an event as one record (without newline).
#[derive(Debug, Clone, Copy)]
pub struct EventLine<'a>(pub &'a AuditEvent);

impl fmt::Display for EventLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = self.0;
        write!(
            f,
            "{}:{}:{}::{}:{}:{}",
            event.file_name,
            event.line,
            event.column,
            event.source_name,
            event.severity,
            event.message
        )
    }
}

/// Render an event as one record, without the trailing newline.
pub fn format_event(event: &AuditEvent) -> String {
    EventLine(event).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::SeverityLevel;

    fn example() -> AuditEvent {
        AuditEvent::new("Foo.java", "bad indent")
            .with_location(10, 5)
            .with_source("checkstyle.rules.Example")
            .with_severity(SeverityLevel::Warning)
    }

    #[test]
    fn formats_all_fields() {
        insta::assert_snapshot!(
            format_event(&example()),
            @"Foo.java:10:5::checkstyle.rules.Example:WARNING:bad indent"
        );
    }

    #[test]
    fn zero_column_is_printed() {
        let event = example().with_location(10, 0);
        assert_eq!(
            format_event(&event),
            "Foo.java:10:0::checkstyle.rules.Example:WARNING:bad indent"
        );
    }

    #[test]
    fn negative_positions_are_printed_verbatim() {
        let event = example().with_location(-3, -1);
        assert!(format_event(&event).starts_with("Foo.java:-3:-1::"));
    }

    #[test]
    fn empty_fields_keep_separators() {
        let event = AuditEvent::default();
        assert_eq!(format_event(&event), ":0:0:::ERROR:");
    }

    #[test]
    fn message_colons_are_not_escaped() {
        let event = example().with_severity(SeverityLevel::Error);
        let event = AuditEvent {
            message: "expected: ';'".into(),
            ..event
        };
        assert!(format_event(&event).ends_with(":ERROR:expected: ';'"));
    }

    #[test]
    fn non_ascii_text_is_kept() {
        let event = AuditEvent::new("Größe.java", "Zeile zu lang — 120 > 100");
        assert_eq!(
            format_event(&event),
            "Größe.java:0:0:::ERROR:Zeile zu lang — 120 > 100"
        );
    }

    #[test]
    fn display_adapter_matches_format_event() {
        let event = example();
        assert_eq!(EventLine(&event).to_string(), format_event(&event));
    }
}
