//! Infrastructure layer for gogar
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod persistence;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGameConfig, FileOutputConfig,
    FileReplConfig,
};
pub use logging::JsonlTranscriptLogger;
pub use persistence::{JsonGameRepository, RepositoryError};
