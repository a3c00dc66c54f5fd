//! Logger configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use auditline::config::parse_config;
//! use auditline::SeverityLevel;
//! use std::path::Path;
//!
//! let config = parse_config("minimum_severity: warning", Path::new("inline.yml")).unwrap();
//! assert_eq!(config.minimum_severity, SeverityLevel::Warning);
//! assert!(config.output.is_none());
//! ```
//!
//! # Configuration File Locations
//!
//! 1. An explicit `--config` path
//! 2. `.auditline.yml` in the working directory
//! 3. Built-in defaults

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::LoggerConfig;
