//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod outcome;
pub mod play_game;
