//! Read-only snapshot of an agent's state

use crate::core::{equality_set::EqualitySet, sentence::Sentence};
use crate::rules::{IncompatibilitySet, InferenceSet};
use serde::{Deserialize, Serialize};

/// A challenge with its target resolved to a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeDescription {
    pub target: String,
    pub sentence: Sentence,
}

impl std::fmt::Display for ChallengeDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "challenged {}'s entitlement to \"{}\"",
            self.target, self.sentence
        )
    }
}

/// Everything an agent holds, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDescription {
    pub name: String,
    pub intelligence: u32,
    pub commitments_avowed: EqualitySet<Sentence>,
    pub incompatibilities: IncompatibilitySet,
    pub committive_inferences: InferenceSet,
    pub permissive_inferences: InferenceSet,
    /// Challenges against agents still in the game
    pub challenges_issued: Vec<ChallengeDescription>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_description_display() {
        let c = ChallengeDescription {
            target: "Bob".to_string(),
            sentence: Sentence::from("A is red"),
        };
        assert_eq!(c.to_string(), "challenged Bob's entitlement to \"A is red\"");
    }
}
