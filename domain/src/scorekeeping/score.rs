//! Score value objects

use super::attribution::{commitments, entitlements, incompatibles};
use crate::agent::Agent;
use crate::core::{equality_set::EqualitySet, sentence::Sentence};
use crate::rules::IncompatibilitySet;
use serde::{Deserialize, Serialize};

/// One scorekeeper's view of one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub commitments: EqualitySet<Sentence>,
    pub entitlements: EqualitySet<Sentence>,
    pub incompatibles: IncompatibilitySet,
}

impl Score {
    /// Compute `scorekeeper`'s score on `other` against the whole population.
    ///
    /// Each part is computed independently from current state; nothing is
    /// cached between calls.
    pub fn compute(population: &[Agent], scorekeeper: &Agent, other: &Agent) -> Self {
        Self {
            commitments: commitments(scorekeeper, other),
            entitlements: entitlements(population, scorekeeper, other),
            incompatibles: incompatibles(scorekeeper, other),
        }
    }
}

/// A [`Score`] labelled with the pair it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub scorekeeper: String,
    pub other: String,
    pub score: Score,
}

/// Every ordered pair of agents, self-pairs included, sorted by name.
pub fn score_all(population: &[Agent]) -> Vec<ScoreCard> {
    let mut agents: Vec<&Agent> = population.iter().collect();
    agents.sort_by(|a, b| a.name().cmp(b.name()));

    agents
        .iter()
        .flat_map(|scorekeeper| {
            agents.iter().map(move |other| ScoreCard {
                scorekeeper: scorekeeper.name().to_string(),
                other: other.name().to_string(),
                score: Score::compute(population, scorekeeper, other),
            })
        })
        .collect()
}
