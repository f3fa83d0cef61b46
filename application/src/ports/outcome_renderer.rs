//! Outcome rendering port
//!
//! Turns a [`CommandOutcome`] into the text shown to the player and kept
//! in the transcript. Line-wrapping and colors are the renderer's business.

use crate::use_cases::outcome::CommandOutcome;

/// Trait for rendering command outcomes
pub trait OutcomeRenderer {
    fn render(&self, outcome: &CommandOutcome) -> String;
}
