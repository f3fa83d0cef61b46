//! Seed rule sets for new agents
//!
//! Every agent starts out holding a copy of the same seed rules. The
//! [`Default`] seed is a small color/edibility vocabulary about an object
//! "A", enough to play a game without adding rules by hand.

use super::incompatibility::{IncompatibilitySet, incompatibility};
use super::inference::{Inference, InferenceSet};
use serde::{Deserialize, Serialize};

/// A raw premises/conclusion pair, as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceSeed {
    pub premises: Vec<String>,
    pub conclusion: String,
}

impl InferenceSeed {
    pub fn new(premises: &[&str], conclusion: &str) -> Self {
        Self {
            premises: premises.iter().map(|s| s.to_string()).collect(),
            conclusion: conclusion.to_string(),
        }
    }

    /// Convert into an [`Inference`]
    pub fn to_inference(&self) -> Inference {
        Inference::new(&self.premises, &self.conclusion)
    }
}

/// Rule sets handed to every newly created agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSeed {
    /// Committive inferences
    pub committive: Vec<InferenceSeed>,
    /// Permissive inferences
    pub permissive: Vec<InferenceSeed>,
    /// Incompatibility sets
    pub incompatibilities: Vec<Vec<String>>,
}

impl RuleSeed {
    /// A seed with no rules at all
    pub fn empty() -> Self {
        Self {
            committive: Vec::new(),
            permissive: Vec::new(),
            incompatibilities: Vec::new(),
        }
    }

    pub fn committive_inferences(&self) -> InferenceSet {
        self.committive.iter().map(InferenceSeed::to_inference).collect()
    }

    pub fn permissive_inferences(&self) -> InferenceSet {
        self.permissive.iter().map(InferenceSeed::to_inference).collect()
    }

    pub fn incompatibility_set(&self) -> IncompatibilitySet {
        self.incompatibilities
            .iter()
            .map(|sentences| incompatibility(sentences))
            .collect()
    }
}

impl Default for RuleSeed {
    fn default() -> Self {
        let pair = |a: &str, b: &str| vec![a.to_string(), b.to_string()];
        Self {
            committive: vec![
                InferenceSeed::new(&["A is red"], "A is colored"),
                InferenceSeed::new(&["A is blue"], "A is colored"),
                InferenceSeed::new(&["A is green"], "A is colored"),
            ],
            permissive: vec![
                InferenceSeed::new(&["A is red", "A is fragrant"], "A is edible"),
                InferenceSeed::new(&["A is blue", "A is small"], "A is poisonous"),
            ],
            incompatibilities: vec![
                pair("A is red", "A is blue"),
                pair("A is red", "A is green"),
                pair("A is blue", "A is green"),
                pair("A is edible", "A is poisonous"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_contents() {
        let seed = RuleSeed::default();
        assert_eq!(seed.committive_inferences().len(), 3);
        assert_eq!(seed.permissive_inferences().len(), 2);
        assert_eq!(seed.incompatibility_set().len(), 4);
        assert!(
            seed.committive_inferences()
                .contains(&Inference::new(["A is red"], "A is colored"))
        );
        assert!(
            seed.incompatibility_set()
                .contains(&incompatibility(["A is blue", "A is red"]))
        );
    }

    #[test]
    fn test_duplicate_seed_rules_collapse() {
        let mut seed = RuleSeed::empty();
        seed.committive.push(InferenceSeed::new(&["p", "q"], "r"));
        seed.committive.push(InferenceSeed::new(&["q", "p"], "r"));
        assert_eq!(seed.committive_inferences().len(), 1);
    }

    #[test]
    fn test_partial_seed_deserializes_with_defaults() {
        let seed: RuleSeed =
            serde_json::from_str(r#"{"incompatibilities": [["p", "q"]]}"#).unwrap();
        assert_eq!(seed.incompatibility_set().len(), 1);
        assert_eq!(seed.committive.len(), 3);
    }
}
