//! Configuration file loading for gogar
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GOGAR_*` environment variables (`GOGAR_GAME__INTELLIGENCE=3`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./gogar.toml` or `./.gogar.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/gogar/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGameConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
