//! Agent entity

use super::value_objects::{AgentId, Challenge};
use crate::core::{equality_set::EqualitySet, sentence::Sentence};
use crate::rules::{Incompatibility, IncompatibilitySet, Inference, InferenceSet, RuleSeed};
use serde::{Deserialize, Serialize};

/// Reasoning depth given to agents unless configured otherwise
pub const DEFAULT_INTELLIGENCE: u32 = 100;

/// A participant in the game of giving and asking for reasons.
///
/// `intelligence` is a reasoning-depth budget: the number of rounds the
/// agent gets when tracing consequences as a scorekeeper, and when
/// extending its own entitlements as the one being scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    name: String,
    intelligence: u32,
    commitments_avowed: EqualitySet<Sentence>,
    incompatibilities: IncompatibilitySet,
    committive_inferences: InferenceSet,
    permissive_inferences: InferenceSet,
    challenges_issued: EqualitySet<Challenge>,
}

impl Agent {
    /// Create an agent holding no rules
    pub fn new(id: AgentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            intelligence: DEFAULT_INTELLIGENCE,
            commitments_avowed: EqualitySet::new(),
            incompatibilities: IncompatibilitySet::new(),
            committive_inferences: InferenceSet::new(),
            permissive_inferences: InferenceSet::new(),
            challenges_issued: EqualitySet::new(),
        }
    }

    /// Create an agent holding a copy of the seed rules
    pub fn with_seed(id: AgentId, name: impl Into<String>, seed: &RuleSeed) -> Self {
        Self {
            incompatibilities: seed.incompatibility_set(),
            committive_inferences: seed.committive_inferences(),
            permissive_inferences: seed.permissive_inferences(),
            ..Self::new(id, name)
        }
    }

    /// Builder-style intelligence override
    pub fn with_intelligence(mut self, intelligence: u32) -> Self {
        self.intelligence = intelligence;
        self
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name match
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn intelligence(&self) -> u32 {
        self.intelligence
    }

    pub fn set_intelligence(&mut self, intelligence: u32) {
        self.intelligence = intelligence;
    }

    pub fn commitments_avowed(&self) -> &EqualitySet<Sentence> {
        &self.commitments_avowed
    }

    pub fn incompatibilities(&self) -> &IncompatibilitySet {
        &self.incompatibilities
    }

    pub fn committive_inferences(&self) -> &InferenceSet {
        &self.committive_inferences
    }

    pub fn permissive_inferences(&self) -> &InferenceSet {
        &self.permissive_inferences
    }

    pub fn challenges_issued(&self) -> &EqualitySet<Challenge> {
        &self.challenges_issued
    }

    /// Whether the agent has avowed `sentence`
    pub fn avows(&self, sentence: &Sentence) -> bool {
        self.commitments_avowed.contains(sentence)
    }

    // ==================== Commitments ====================

    /// Avow a sentence. Returns `false` if it was already avowed.
    pub fn asserts(&mut self, sentence: impl Into<Sentence>) -> bool {
        self.commitments_avowed.add(sentence.into())
    }

    /// Stop avowing a sentence. Returns `false` if it was never avowed.
    pub fn disavows(&mut self, sentence: &Sentence) -> bool {
        self.commitments_avowed.delete(sentence)
    }

    // ==================== Challenges ====================

    /// Record a challenge, normally one built by [`Challenge::against`].
    /// Returns `false` if it was already on record.
    pub fn record_challenge(&mut self, challenge: Challenge) -> bool {
        self.challenges_issued.add(challenge)
    }

    /// Withdraw a challenge. Returns `false` if no such challenge was issued.
    pub fn withdraws_challenge(&mut self, target: AgentId, sentence: impl Into<Sentence>) -> bool {
        self.challenges_issued
            .delete(&Challenge::new(target, sentence))
    }

    /// Forget every challenge aimed at `target`. Returns how many were dropped.
    pub fn drop_challenges_against(&mut self, target: AgentId) -> usize {
        let before = self.challenges_issued.len();
        self.challenges_issued.retain(|c| !c.targets(target));
        before - self.challenges_issued.len()
    }

    /// Sentences this agent disputes for `target`
    pub fn sentences_challenged_for(&self, target: AgentId) -> impl Iterator<Item = &Sentence> {
        self.challenges_issued
            .iter()
            .filter(move |c| c.targets(target))
            .map(|c| &c.sentence)
    }

    // ==================== Rules ====================

    pub fn add_committive_inference(&mut self, inference: Inference) -> bool {
        self.committive_inferences.add(inference)
    }

    pub fn remove_committive_inference(&mut self, inference: &Inference) -> bool {
        self.committive_inferences.delete(inference)
    }

    pub fn add_permissive_inference(&mut self, inference: Inference) -> bool {
        self.permissive_inferences.add(inference)
    }

    pub fn remove_permissive_inference(&mut self, inference: &Inference) -> bool {
        self.permissive_inferences.delete(inference)
    }

    pub fn add_incompatibility(&mut self, incompatibility: Incompatibility) -> bool {
        self.incompatibilities.add(incompatibility)
    }

    pub fn remove_incompatibility(&mut self, incompatibility: &Incompatibility) -> bool {
        self.incompatibilities.delete(incompatibility)
    }
}
