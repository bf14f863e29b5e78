//! Configuration file loading for antfarm
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ANTFARM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./antfarm.toml` or `./.antfarm.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/antfarm/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDisplayConfig, FileGridConfig, FileScheduleConfig,
};
pub use loader::ConfigLoader;
