//! Presentation layer for gogar
//!
//! This crate contains CLI definitions, the outcome formatter and the
//! interactive REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use repl::GameRepl;
