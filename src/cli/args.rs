//! CLI argument definitions.
//!
//! This module defines the CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::event::SeverityLevel;

/// auditline - Render audit events as colon-delimited report lines.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "auditline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON-lines event file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Path to config file (overrides .auditline.yml)
    #[arg(short, long, env = "AUDITLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write violation records to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write info output to this file
    #[arg(long)]
    pub info_output: Option<PathBuf>,

    /// Lowest severity to report (ignore, info, warning, error)
    #[arg(long, value_name = "LEVEL")]
    pub min_severity: Option<SeverityLevel>,

    /// Print exception cause chains after their record
    #[arg(long)]
    pub render_causes: bool,

    /// Do not print the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
