//! Commitment, incompatibility and entitlement attribution
//!
//! Every function here answers "what does `scorekeeper` take `other` to
//! be committed / entitled to?". The scorekeeper's rules are always the
//! ones applied; the other agent contributes only its avowals and, for
//! entitlements, its reasoning budget.
//!
//! Entitlement is not local to the pair being scored: the default pool is
//! built from every agent's avowals and every agent's challenges, so the
//! whole population is passed in explicitly.

use super::closure::{consequences_once, consequences_once_and_prune, fixed_point, remove_incompatibles};
use crate::agent::{Agent, AgentId};
use crate::core::{equality_set::EqualitySet, sentence::Sentence};
use crate::rules::{IncompatibilitySet, InferenceSet};
use tracing::trace;

/// What `scorekeeper` takes `other` to be committed to.
///
/// Closes `other`'s avowals under the scorekeeper's committive rules, for at
/// most `scorekeeper.intelligence()` rounds.
pub fn commitments(scorekeeper: &Agent, other: &Agent) -> EqualitySet<Sentence> {
    let closure = fixed_point(
        other.commitments_avowed().clone(),
        scorekeeper.intelligence(),
        |set| consequences_once(scorekeeper.committive_inferences(), set),
    );
    trace!(
        scorekeeper = scorekeeper.name(),
        other = other.name(),
        rounds = closure.rounds,
        converged = closure.converged,
        "commitment closure"
    );
    closure.into_value()
}

/// The scorekeeper's incompatibility sets that `other` is fully committed to.
pub fn incompatibles(scorekeeper: &Agent, other: &Agent) -> IncompatibilitySet {
    let coms = commitments(scorekeeper, other);
    scorekeeper
        .incompatibilities()
        .iter()
        .filter(|inc| inc.is_subset(&coms))
        .cloned()
        .collect()
}

/// Sentences any agent in `population` has challenged `target` on.
///
/// Challenges are only counted against the agent whose id they carry, so a
/// challenge aimed at an agent that has left the game matches nobody.
pub fn challenged_sentences_of(population: &[Agent], target: AgentId) -> EqualitySet<Sentence> {
    population
        .iter()
        .flat_map(|a| a.sentences_challenged_for(target))
        .cloned()
        .collect()
}

/// `agent`'s avowals that nobody has challenged.
pub fn unchallenged_assertions(population: &[Agent], agent: &Agent) -> EqualitySet<Sentence> {
    agent
        .commitments_avowed()
        .difference(&challenged_sentences_of(population, agent.id()))
}

/// The default-entitlement pool: every unchallenged avowal of every agent.
pub fn all_unchallenged_assertions(population: &[Agent]) -> EqualitySet<Sentence> {
    let mut all = EqualitySet::new();
    for agent in population {
        all.extend(unchallenged_assertions(population, agent));
    }
    all
}

/// One round of entitlement growth.
///
/// Committive rules confer entitlement from entitled premises. Permissive
/// rules fire only from premises that are both entitled and committed.
/// Both results are pruned against the commitments.
pub fn expand_entitlements(
    coms: &EqualitySet<Sentence>,
    ents: &EqualitySet<Sentence>,
    incs: &IncompatibilitySet,
    committive: &InferenceSet,
    permissive: &InferenceSet,
) -> EqualitySet<Sentence> {
    let via_committive = consequences_once_and_prune(committive, ents, coms, incs);
    let via_permissive =
        consequences_once_and_prune(permissive, &ents.intersection(coms), coms, incs);
    via_committive.union(&via_permissive)
}

/// What `scorekeeper` takes `other` to be entitled to, given everyone in
/// `population`.
///
/// Starts from the default pool minus whatever clashes with `other`'s
/// attributed commitments, then expands for at most
/// `other.intelligence()` rounds. Commitments are bounded by the
/// scorekeeper's budget; entitlements by the other's.
pub fn entitlements(population: &[Agent], scorekeeper: &Agent, other: &Agent) -> EqualitySet<Sentence> {
    let coms = commitments(scorekeeper, other);
    let incs = scorekeeper.incompatibilities();
    let base = remove_incompatibles(&all_unchallenged_assertions(population), &coms, incs);

    let closure = fixed_point(base, other.intelligence(), |ents| {
        expand_entitlements(
            &coms,
            ents,
            incs,
            scorekeeper.committive_inferences(),
            scorekeeper.permissive_inferences(),
        )
    });
    trace!(
        scorekeeper = scorekeeper.name(),
        other = other.name(),
        rounds = closure.rounds,
        converged = closure.converged,
        "entitlement closure"
    );
    closure.into_value()
}
