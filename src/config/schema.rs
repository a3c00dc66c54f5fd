//! Configuration schema for the logger.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::SeverityLevel;
use crate::listener::SeverityFilter;
use crate::logger::DefaultLogger;

/// Root of `.auditline.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// File receiving violation records (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// File receiving info output (shares `output` when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_output: Option<PathBuf>,

    /// Lowest severity written
    #[serde(default = "default_minimum_severity")]
    pub minimum_severity: SeverityLevel,

    /// Write exception cause chains after their record line
    #[serde(default, skip_serializing_if = "is_false")]
    pub render_causes: bool,
}

fn default_minimum_severity() -> SeverityLevel {
    SeverityLevel::Info
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            output: None,
            info_output: None,
            minimum_severity: default_minimum_severity(),
            render_causes: false,
        }
    }
}

impl LoggerConfig {
    /// Open the configured sinks and build the filtered logger.
    ///
    /// Files named by the config are created and closed at session end.
    /// Stdout is never closed.
    pub fn open_logger(&self) -> Result<SeverityFilter<DefaultLogger>> {
        let logger = match (&self.info_output, &self.output) {
            (None, None) => DefaultLogger::new(io::stdout(), false),
            (None, Some(output)) => DefaultLogger::to_path(output)?,
            (Some(info), Some(output)) => DefaultLogger::to_paths(info, output)?,
            (Some(info), None) => {
                DefaultLogger::with_streams(File::create(info)?, true, io::stdout(), false)
            }
        };
        Ok(SeverityFilter::new(
            logger.with_cause_rendering(self.render_causes),
            self.minimum_severity,
        ))
    }
}
