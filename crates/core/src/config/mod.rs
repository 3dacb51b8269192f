//! Settings file loading and scan target resolution.

pub mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, DEFAULT_CONFIG_FILE, candidate_config_paths, resolve_target,
    user_config_path,
};
pub use types::{ConfigFile, LoggingConfig, ResolvedConfig, TargetOverrides};
