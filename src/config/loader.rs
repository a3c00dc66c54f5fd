//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::LoggerConfig;
use crate::error::{AuditError, Result};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".auditline.yml";

/// Find `.auditline.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file does not exist.
/// Returns `ConfigParseError` if the file is not a valid config.
pub fn load_config_file(path: &Path) -> Result<LoggerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`LoggerConfig`].
///
/// An empty document yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LoggerConfig> {
    if content.trim().is_empty() {
        return Ok(LoggerConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| AuditError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, only that file is loaded and it must
/// exist. Otherwise `.auditline.yml` in `dir` is used when present, and
/// the defaults when not.
pub fn load_config(dir: &Path, config_override: Option<&Path>) -> Result<LoggerConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }
    match find_config(dir) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(LoggerConfig::default()),
    }
}
