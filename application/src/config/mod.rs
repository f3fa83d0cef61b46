//! Application-level configuration.
//!
//! - [`GameConfig`]: seed rules, starting agents and default intelligence
//!   for new agents

pub mod game_config;

pub use game_config::GameConfig;
