use std::path::PathBuf;

use serde::Deserialize;

use crate::report::ScanTarget;

/// On-disk settings file.
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Single Terraform file to scan.
    pub file: Option<String>,
    /// Directory to scan recursively for `.tf` files.
    pub dir: Option<String>,
    /// Folders to skip in directory mode (relative to `dir`).
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct TargetOverrides {
    pub file: Option<String>,
    pub dir: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Settings file that was read, if any.
    pub source: Option<PathBuf>,
    /// Default settings locations that exist but are directories.
    pub skipped_configs: Vec<PathBuf>,
    pub target: ScanTarget,
    pub excluded_folders: Vec<PathBuf>,
    pub logging: LoggingConfig,
}
