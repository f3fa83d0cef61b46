//! Forward-chaining closure primitives
//!
//! These are pure functions over sets of sentences. The attribution rules in
//! [`super::attribution`] are built entirely from them.

use crate::core::{equality_set::EqualitySet, sentence::Sentence};
use crate::rules::{IncompatibilitySet, InferenceSet};

/// `basis` plus the conclusion of every rule whose premises all lie in `basis`.
///
/// Never removes anything from `basis`.
pub fn consequences_once(
    inferences: &InferenceSet,
    basis: &EqualitySet<Sentence>,
) -> EqualitySet<Sentence> {
    let mut result = basis.clone();
    result.extend(
        inferences
            .iter()
            .filter(|inf| inf.fires_from(basis))
            .map(|inf| inf.conclusion().clone()),
    );
    result
}

/// Whether `sentence` can join `commitments` without completing an
/// incompatibility.
///
/// The test is marginal: a sentence is rejected only when some
/// incompatibility holds of `commitments ∪ {sentence}` but not of that set
/// with `sentence` taken back out. Commitments that are already jointly
/// incompatible do not, by themselves, rule out an unrelated newcomer.
pub fn compatible_with(
    incompatibilities: &IncompatibilitySet,
    commitments: &EqualitySet<Sentence>,
    sentence: &Sentence,
) -> bool {
    let all = commitments.with(sentence.clone());
    let without = all.without(sentence);
    !incompatibilities
        .iter()
        .any(|inc| inc.is_subset(&all) && !inc.is_subset(&without))
}

/// The members of `candidates` that are [`compatible_with`] `commitments`.
pub fn remove_incompatibles(
    candidates: &EqualitySet<Sentence>,
    commitments: &EqualitySet<Sentence>,
    incompatibilities: &IncompatibilitySet,
) -> EqualitySet<Sentence> {
    candidates
        .iter()
        .filter(|s| compatible_with(incompatibilities, commitments, s))
        .cloned()
        .collect()
}

/// One forward-chaining step from `base`, then prune against `commitments`.
pub fn consequences_once_and_prune(
    inferences: &InferenceSet,
    base: &EqualitySet<Sentence>,
    commitments: &EqualitySet<Sentence>,
    incompatibilities: &IncompatibilitySet,
) -> EqualitySet<Sentence> {
    remove_incompatibles(
        &consequences_once(inferences, base),
        commitments,
        incompatibilities,
    )
}

/// Outcome of a bounded fixed-point computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPoint<T> {
    /// The last set reached
    pub value: T,
    /// Number of times the step was applied
    pub rounds: u32,
    /// Whether the last application returned its input unchanged
    pub converged: bool,
}

impl<T> FixedPoint<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Apply `step` until it stops changing the set or `max_iterations`
/// applications have been made, whichever comes first.
///
/// The cap models a limited reasoner: a small budget can stop short of the
/// true closure and that shorter result is the intended answer.
pub fn fixed_point<T, F>(initial: T, max_iterations: u32, mut step: F) -> FixedPoint<T>
where
    T: PartialEq,
    F: FnMut(&T) -> T,
{
    let mut current = initial;
    let mut rounds = 0;
    while rounds < max_iterations {
        let next = step(&current);
        rounds += 1;
        if next == current {
            return FixedPoint {
                value: current,
                rounds,
                converged: true,
            };
        }
        current = next;
    }
    FixedPoint {
        value: current,
        rounds,
        converged: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Inference, incompatibility};

    fn sentences(items: &[&str]) -> EqualitySet<Sentence> {
        items.iter().map(|s| Sentence::from(*s)).collect()
    }

    fn chain() -> InferenceSet {
        // a -> b -> c -> d
        [
            Inference::new(["a"], "b"),
            Inference::new(["b"], "c"),
            Inference::new(["c"], "d"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_consequences_once_adds_one_layer() {
        let result = consequences_once(&chain(), &sentences(&["a"]));
        assert_eq!(result, sentences(&["a", "b"]));
    }

    #[test]
    fn test_consequences_once_needs_all_premises() {
        let infs: InferenceSet = [Inference::new(["p", "q"], "r")].into_iter().collect();
        assert_eq!(
            consequences_once(&infs, &sentences(&["p"])),
            sentences(&["p"])
        );
        assert_eq!(
            consequences_once(&infs, &sentences(&["p", "q"])),
            sentences(&["p", "q", "r"])
        );
    }

    #[test]
    fn test_consequences_once_is_monotonic() {
        let basis = sentences(&["a", "x", "y"]);
        let result = consequences_once(&chain(), &basis);
        assert!(basis.is_subset(&result));
    }

    #[test]
    fn test_compatible_with_rejects_completing_sentence() {
        let incs: IncompatibilitySet = [incompatibility(["A is red", "A is blue"])]
            .into_iter()
            .collect();
        let coms = sentences(&["A is red"]);
        assert!(!compatible_with(&incs, &coms, &Sentence::from("A is blue")));
        assert!(compatible_with(&incs, &coms, &Sentence::from("A is small")));
    }

    #[test]
    fn test_compatible_with_ignores_preexisting_violation() {
        let incs: IncompatibilitySet = [incompatibility(["A is red", "A is blue"])]
            .into_iter()
            .collect();
        let coms = sentences(&["A is red", "A is blue"]);
        assert!(compatible_with(&incs, &coms, &Sentence::from("A is small")));
    }

    #[test]
    fn test_compatible_with_rejects_member_of_violated_set() {
        // Both members are already committed: each one is what completes the
        // violation once the other is in place.
        let incs: IncompatibilitySet = [incompatibility(["A is red", "A is blue"])]
            .into_iter()
            .collect();
        let coms = sentences(&["A is red", "A is blue"]);
        assert!(!compatible_with(&incs, &coms, &Sentence::from("A is red")));
        assert!(!compatible_with(&incs, &coms, &Sentence::from("A is blue")));
    }

    #[test]
    fn test_compatible_with_any_newly_completed_set_rejects() {
        let incs: IncompatibilitySet = [
            incompatibility(["A is red", "A is blue"]),
            incompatibility(["A is green", "A is blue"]),
        ]
        .into_iter()
        .collect();
        let coms = sentences(&["A is green"]);
        assert!(!compatible_with(&incs, &coms, &Sentence::from("A is blue")));
    }

    #[test]
    fn test_remove_incompatibles_filters_candidates() {
        let incs: IncompatibilitySet = [incompatibility(["A is red", "A is blue"])]
            .into_iter()
            .collect();
        let candidates = sentences(&["A is blue", "A is small"]);
        let coms = sentences(&["A is red"]);
        assert_eq!(
            remove_incompatibles(&candidates, &coms, &incs),
            sentences(&["A is small"])
        );
    }

    #[test]
    fn test_consequences_once_and_prune() {
        let infs: InferenceSet = [Inference::new(["A is sky-colored"], "A is blue")]
            .into_iter()
            .collect();
        let incs: IncompatibilitySet = [incompatibility(["A is red", "A is blue"])]
            .into_iter()
            .collect();
        let result = consequences_once_and_prune(
            &infs,
            &sentences(&["A is sky-colored"]),
            &sentences(&["A is red"]),
            &incs,
        );
        assert_eq!(result, sentences(&["A is sky-colored"]));
    }

    #[test]
    fn test_fixed_point_converges() {
        let result = fixed_point(sentences(&["a"]), 100, |s| consequences_once(&chain(), s));
        assert_eq!(result.value, sentences(&["a", "b", "c", "d"]));
        assert!(result.converged);
        // three growing rounds plus the round that confirms stability
        assert_eq!(result.rounds, 4);
    }

    #[test]
    fn test_fixed_point_respects_budget() {
        let result = fixed_point(sentences(&["a"]), 2, |s| consequences_once(&chain(), s));
        assert_eq!(result.value, sentences(&["a", "b", "c"]));
        assert!(!result.converged);
        assert_eq!(result.rounds, 2);
    }

    #[test]
    fn test_fixed_point_zero_budget_returns_initial() {
        let result = fixed_point(sentences(&["a"]), 0, |s| consequences_once(&chain(), s));
        assert_eq!(result.value, sentences(&["a"]));
        assert_eq!(result.rounds, 0);
    }

    #[test]
    fn test_fixed_point_terminates_or_exhausts_budget() {
        for budget in 0..6 {
            let result =
                fixed_point(sentences(&["a"]), budget, |s| consequences_once(&chain(), s));
            assert!(result.rounds <= budget);
            let stable = consequences_once(&chain(), &result.value) == result.value;
            assert!(stable || result.rounds == budget);
        }
    }
}
