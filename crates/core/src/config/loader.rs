use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig, TargetOverrides};
use crate::report::ScanTarget;

/// Settings file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("config path {0} is a directory, expected a file")]
    ConfigIsDirectory(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("home directory not available to expand '{0}'")]
    NoHome(String),

    #[error("missing parameter --file or --dir")]
    MissingTarget,

    #[error("directory defined for --file when expecting a file: {0}")]
    FileIsDirectory(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings and merge command-line overrides on top.
    ///
    /// An explicit `config_path` must exist. Without one, the first regular
    /// file among [`candidate_config_paths`] is used, or defaults if none exist.
    pub fn load(
        config_path: Option<&Path>,
        overrides: &TargetOverrides,
    ) -> Result<ResolvedConfig, ConfigError> {
        let (cf, source, skipped) = match config_path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()));
                }
                if p.is_dir() {
                    return Err(ConfigError::ConfigIsDirectory(p.display().to_string()));
                }
                (Self::read(p)?, Some(p.to_path_buf()), Vec::new())
            }
            None => Self::discover()?,
        };

        let mut resolved = Self::resolve(cf, overrides)?;
        resolved.source = source;
        resolved.skipped_configs = skipped;
        Ok(resolved)
    }

    /// Parse a settings file without resolving it.
    pub fn read(path: &Path) -> Result<ConfigFile, ConfigError> {
        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        toml::from_str(&s).map_err(|e| ConfigError::ParseError(path.display().to_string(), e))
    }

    fn discover() -> Result<(ConfigFile, Option<PathBuf>, Vec<PathBuf>), ConfigError> {
        let mut skipped = Vec::new();

        for path in candidate_config_paths() {
            if path.is_dir() {
                skipped.push(path);
                continue;
            }
            if path.is_file() {
                let cf = Self::read(&path)?;
                return Ok((cf, Some(path), skipped));
            }
        }

        Ok((ConfigFile::default(), None, skipped))
    }

    fn resolve(
        cf: ConfigFile,
        overrides: &TargetOverrides,
    ) -> Result<ResolvedConfig, ConfigError> {
        let file = non_empty(overrides.file.clone()).or(non_empty(cf.file));
        let dir = non_empty(overrides.dir.clone()).or(non_empty(cf.dir));

        let file = file.as_deref().map(expand_path).transpose()?;
        let dir = dir.as_deref().map(expand_path).transpose()?;
        let target = resolve_target(file.as_deref(), dir.as_deref())?;

        let excluded_folders = cf
            .exclude
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| expand_path(s.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        let logging = LoggingConfig {
            level: non_empty(overrides.log_level.clone()).unwrap_or(cf.logging.level),
            file_level: cf.logging.file_level,
            file: cf
                .logging
                .file
                .map(|f| expand_path(&f.to_string_lossy()))
                .transpose()?,
        };

        Ok(ResolvedConfig {
            source: None,
            skipped_configs: Vec::new(),
            target,
            excluded_folders,
            logging,
        })
    }
}

/// Pick the scan target from the supplied paths.
///
/// A file wins over a directory when both are given.
pub fn resolve_target(
    file: Option<&Path>,
    dir: Option<&Path>,
) -> Result<ScanTarget, ConfigError> {
    if let Some(file) = file {
        if file.is_dir() {
            return Err(ConfigError::FileIsDirectory(file.display().to_string()));
        }
        return Ok(ScanTarget::File(file.to_path_buf()));
    }

    match dir {
        Some(dir) => Ok(ScanTarget::Directory(dir.to_path_buf())),
        None => Err(ConfigError::MissingTarget),
    }
}

/// Settings file locations, in lookup order: the working directory, then
/// the user config directory.
pub fn candidate_config_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(DEFAULT_CONFIG_FILE), user_config_path()]
}

pub fn user_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("report-tfvars").join(DEFAULT_CONFIG_FILE);
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("report-tfvars").join(DEFAULT_CONFIG_FILE)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome(input.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}
