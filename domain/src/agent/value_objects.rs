//! Value objects for the agent domain
//!
//! - [`AgentId`] - Stable identity of an agent within one game
//! - [`Challenge`] - A dispute against another agent's entitlement

use super::entities::Agent;
use crate::core::sentence::Sentence;
use serde::{Deserialize, Serialize};

/// Stable identifier for an agent.
///
/// Ids are handed out by the game from a counter and never reused, so a
/// reference to a removed agent stays dangling even if an agent with the
/// same name joins later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(u64);

impl AgentId {
    /// Creates an AgentId from a raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A recorded dispute of `target`'s entitlement to `sentence`.
///
/// Held in the issuing agent's `challenges_issued`. The target is a
/// non-owning reference; if the target leaves the game the challenge is
/// vacuous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub target: AgentId,
    pub sentence: Sentence,
}

impl Challenge {
    pub fn new(target: AgentId, sentence: impl Into<Sentence>) -> Self {
        Self {
            target,
            sentence: sentence.into(),
        }
    }

    /// A challenge of `target`'s entitlement to `sentence`, or `None` if
    /// `target` never avowed it
    pub fn against(target: &Agent, sentence: impl Into<Sentence>) -> Option<Self> {
        let sentence = sentence.into();
        target
            .avows(&sentence)
            .then(|| Self::new(target.id(), sentence))
    }

    /// Whether this challenge disputes an entitlement held by `agent`
    pub fn targets(&self, agent: AgentId) -> bool {
        self.target == agent
    }
}
