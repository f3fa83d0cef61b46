//! Domain layer for gogar
//!
//! This crate contains the scorekeeping engine: agents, their inference
//! and incompatibility rules, and the algorithms that compute what one
//! agent attributes to another. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Scorekeeping
//!
//! Agents assert sentences and challenge each other's entitlements. A
//! *scorekeeper* interprets another agent's position with its own rules:
//!
//! - **Commitments**: the other's avowals closed under the scorekeeper's
//!   committive inferences
//! - **Entitlements**: unchallenged avowals from the whole game, expanded by
//!   committive and permissive inferences and pruned for incompatibility
//! - **Incompatibles**: the scorekeeper's incompatibility sets the other is
//!   fully committed to
//!
//! ## Intelligence
//!
//! Each closure is a bounded fixed point. The scorekeeper's intelligence
//! caps commitment tracing; the other agent's caps entitlement expansion.

pub mod agent;
pub mod core;
pub mod game;
pub mod rules;
pub mod scorekeeping;

// Re-export commonly used types
pub use agent::{Agent, AgentId, Challenge, DEFAULT_INTELLIGENCE};
pub use core::{equality_set::EqualitySet, error::DomainError, sentence::Sentence};
pub use game::{AgentDescription, ChallengeDescription, Game, InferenceKind, TranscriptEntry};
pub use rules::{
    Incompatibility, IncompatibilitySet, Inference, InferenceSeed, InferenceSet, RuleSeed,
    incompatibility,
};
pub use scorekeeping::{FixedPoint, Score, ScoreCard};
