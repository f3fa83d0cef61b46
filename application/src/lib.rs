//! Application layer for gogar
//!
//! This crate contains the command grammar, use cases, port definitions and
//! application configuration. It depends only on the domain layer.

pub mod command;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use command::{Command, CommandParser, EXAMPLE_COMMANDS, GrammarError, RuleEdit};
pub use config::GameConfig;
pub use ports::{
    game_repository::GameRepository,
    outcome_renderer::OutcomeRenderer,
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::outcome::{CommandOutcome, CommandResponse};
pub use use_cases::play_game::PlayGameUseCase;
