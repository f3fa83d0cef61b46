//! Game domain module
//!
//! The [`Game`] owns the agent population and an append-only transcript,
//! and exposes the operations external callers drive the simulation with.

pub mod description;
pub mod entities;
pub mod transcript;

pub use description::{AgentDescription, ChallengeDescription};
pub use entities::{Game, InferenceKind};
pub use transcript::TranscriptEntry;
