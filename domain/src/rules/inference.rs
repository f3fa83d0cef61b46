//! Inference rules

use crate::core::{equality_set::EqualitySet, sentence::Sentence};
use serde::{Deserialize, Serialize};

/// A premises/conclusion rule (Value Object)
///
/// Two inferences are equal when their premise sets are equal as sets and
/// their conclusions are equal. Whether a rule is committive or permissive
/// is decided by which of an agent's collections holds it, not by the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inference {
    premises: EqualitySet<Sentence>,
    conclusion: Sentence,
}

impl Inference {
    /// Create a new inference from any collection of premises
    pub fn new<I, S>(premises: I, conclusion: impl Into<Sentence>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sentence>,
    {
        Self {
            premises: premises.into_iter().map(Into::into).collect(),
            conclusion: conclusion.into(),
        }
    }

    /// The premise set
    pub fn premises(&self) -> &EqualitySet<Sentence> {
        &self.premises
    }

    /// The conclusion
    pub fn conclusion(&self) -> &Sentence {
        &self.conclusion
    }

    /// Whether every premise is in `basis`
    pub fn fires_from(&self, basis: &EqualitySet<Sentence>) -> bool {
        self.premises.is_subset(basis)
    }
}

impl std::fmt::Display for Inference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} |- {}", self.premises, self.conclusion)
    }
}

/// A set of inference rules
pub type InferenceSet = EqualitySet<Inference>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_premise_order() {
        let a = Inference::new(["A is red", "A is fragrant"], "A is edible");
        let b = Inference::new(["A is fragrant", "A is red"], "A is edible");
        assert_eq!(a, b);

        let c = Inference::new(["A is red", "A is fragrant"], "A is poisonous");
        assert_ne!(a, c);
    }

    #[test]
    fn test_rule_set_deduplicates_structurally() {
        let mut rules = InferenceSet::new();
        assert!(rules.add(Inference::new(["A is red", "A is small"], "A is dangerous")));
        assert!(!rules.add(Inference::new(["A is small", "A is red"], "A is dangerous")));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_fires_from() {
        let inf = Inference::new(["A is red", "A is fragrant"], "A is edible");
        let partial: EqualitySet<Sentence> = [Sentence::from("A is red")].into_iter().collect();
        assert!(!inf.fires_from(&partial));

        let full = partial.with(Sentence::from("A is fragrant"));
        assert!(inf.fires_from(&full));
    }

    #[test]
    fn test_display() {
        let inf = Inference::new(["A is red"], "A is colored");
        assert_eq!(inf.to_string(), "{A is red} |- A is colored");
    }
}
