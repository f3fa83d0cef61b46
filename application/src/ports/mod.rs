//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod game_repository;
pub mod outcome_renderer;
pub mod transcript_logger;
