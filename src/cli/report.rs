//! Report command implementation.
//!
//! Loads the logger configuration, applies CLI overrides, replays the
//! input events through the configured logger and prints a summary.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use console::style;

use super::args::Cli;
use super::CommandResult;
use crate::config::{load_config, LoggerConfig};
use crate::error::Result;
use crate::replay::{replay, ReplaySummary};

/// The report command.
pub struct ReportCommand {
    working_dir: PathBuf,
    args: Cli,
}

impl ReportCommand {
    /// Create a report command resolving config relative to `working_dir`.
    pub fn new(working_dir: &Path, args: Cli) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Load the config file and apply CLI overrides on top.
    pub fn resolve_config(&self) -> Result<LoggerConfig> {
        let mut config = load_config(&self.working_dir, self.args.config.as_deref())?;

        if let Some(output) = &self.args.output {
            config.output = Some(output.clone());
        }
        if let Some(info_output) = &self.args.info_output {
            config.info_output = Some(info_output.clone());
        }
        if let Some(minimum) = self.args.min_severity {
            config.minimum_severity = minimum;
        }
        if self.args.render_causes {
            config.render_causes = true;
        }
        Ok(config)
    }

    /// Run the command, writing the summary line to `status`.
    pub fn execute(&self, status: &mut dyn Write) -> Result<CommandResult> {
        let config = self.resolve_config()?;

        let input = match &self.args.input {
            Some(path) => Some(BufReader::new(File::open(path)?)),
            None => None,
        };

        let listener = config.open_logger()?;
        let summary = match input {
            Some(reader) => replay(reader, &listener)?,
            None => replay(io::stdin().lock(), &listener)?,
        };

        if !self.args.quiet {
            writeln!(status, "{}", summary_line(&summary))?;
        }

        if summary.has_errors() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

/// The `Found N error(s) and M warning(s)` line.
fn summary_line(summary: &ReplaySummary) -> String {
    let text = format!(
        "Found {} error(s) and {} warning(s)",
        summary.errors, summary.warnings
    );
    if summary.has_errors() {
        style(text).for_stderr().red().to_string()
    } else if summary.warnings > 0 {
        style(text).for_stderr().yellow().to_string()
    } else {
        text
    }
}
