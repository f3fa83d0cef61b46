//! Game entity

use super::description::{AgentDescription, ChallengeDescription};
use super::transcript::TranscriptEntry;
use crate::agent::{Agent, AgentId, Challenge};
use crate::core::{error::DomainError, sentence::Sentence};
use crate::rules::{Incompatibility, Inference, RuleSeed};
use crate::scorekeeping::{Score, ScoreCard, score_all};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Which of an agent's two inference collections a rule edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceKind {
    Committive,
    Permissive,
}

impl InferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InferenceKind::Committive => "committive",
            InferenceKind::Permissive => "permissive",
        }
    }
}

impl std::fmt::Display for InferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One session of the game: the agent population and the transcript.
///
/// Agents are addressed externally by name (case-insensitive) and
/// internally by [`AgentId`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    agents: Vec<Agent>,
    transcript: Vec<TranscriptEntry>,
    next_id: u64,
}

impl Game {
    /// Create an empty game
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every agent and clear the transcript
    pub fn reset(&mut self) {
        info!(agents = self.agents.len(), "Resetting game");
        self.agents.clear();
        self.transcript.clear();
    }

    // ==================== Agent directory ====================

    /// All agents, in the order they joined
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Case-insensitive lookup
    pub fn agent_named(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.is_named(name))
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    fn find(&self, name: &str) -> Result<&Agent, DomainError> {
        self.agent_named(name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Agent, DomainError> {
        self.agents
            .iter_mut()
            .find(|a| a.is_named(name))
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    fn allocate_id(&mut self) -> AgentId {
        self.next_id += 1;
        AgentId::new(self.next_id)
    }

    /// Add an agent holding a copy of `seed`
    pub fn add_agent(
        &mut self,
        name: &str,
        seed: &RuleSeed,
        intelligence: u32,
    ) -> Result<AgentId, DomainError> {
        if self.agent_named(name).is_some() {
            return Err(DomainError::DuplicateName(name.to_string()));
        }
        let id = self.allocate_id();
        self.agents
            .push(Agent::with_seed(id, name, seed).with_intelligence(intelligence));
        info!(agent = name, %id, "Agent added");
        Ok(id)
    }

    /// Remove an agent along with every challenge aimed at it
    pub fn remove_agent(&mut self, name: &str) -> Result<Agent, DomainError> {
        let index = self
            .agents
            .iter()
            .position(|a| a.is_named(name))
            .ok_or_else(|| DomainError::NotFound(name.to_string()))?;
        let agent = self.agents.remove(index);
        let dropped: usize = self
            .agents
            .iter_mut()
            .map(|other| other.drop_challenges_against(agent.id()))
            .sum();
        info!(agent = agent.name(), id = %agent.id(), dropped, "Agent removed");
        Ok(agent)
    }

    // ==================== Commitments & challenges ====================

    /// `name` avows `sentence`
    pub fn assert(&mut self, name: &str, sentence: impl Into<Sentence>) -> Result<bool, DomainError> {
        Ok(self.find_mut(name)?.asserts(sentence))
    }

    /// `name` stops avowing `sentence`; `Ok(false)` if it never did
    pub fn disavow(&mut self, name: &str, sentence: &Sentence) -> Result<bool, DomainError> {
        let removed = self.find_mut(name)?.disavows(sentence);
        if !removed {
            debug!(agent = name, %sentence, "Disavowal of unasserted sentence ignored");
        }
        Ok(removed)
    }

    /// `issuer` challenges `target`'s entitlement to `sentence`.
    ///
    /// Returns `Ok(false)`, leaving state untouched, when the target never
    /// avowed the sentence.
    pub fn challenge(
        &mut self,
        issuer: &str,
        target: &str,
        sentence: impl Into<Sentence>,
    ) -> Result<bool, DomainError> {
        let sentence = sentence.into();
        self.find(issuer)?;
        let target = self.find(target)?;
        let Some(challenge) = Challenge::against(target, sentence.clone()) else {
            debug!(issuer, target = target.name(), %sentence, "Challenge of unasserted sentence ignored");
            return Ok(false);
        };
        Ok(self.find_mut(issuer)?.record_challenge(challenge))
    }

    /// `issuer` withdraws its challenge; `Ok(false)` if there was none
    pub fn withdraw_challenge(
        &mut self,
        issuer: &str,
        target: &str,
        sentence: impl Into<Sentence>,
    ) -> Result<bool, DomainError> {
        self.find(issuer)?;
        let target_id = self.find(target)?.id();
        Ok(self.find_mut(issuer)?.withdraws_challenge(target_id, sentence))
    }

    // ==================== Rules ====================

    pub fn add_inference(
        &mut self,
        name: &str,
        kind: InferenceKind,
        inference: Inference,
    ) -> Result<bool, DomainError> {
        let agent = self.find_mut(name)?;
        Ok(match kind {
            InferenceKind::Committive => agent.add_committive_inference(inference),
            InferenceKind::Permissive => agent.add_permissive_inference(inference),
        })
    }

    pub fn remove_inference(
        &mut self,
        name: &str,
        kind: InferenceKind,
        inference: &Inference,
    ) -> Result<bool, DomainError> {
        let agent = self.find_mut(name)?;
        Ok(match kind {
            InferenceKind::Committive => agent.remove_committive_inference(inference),
            InferenceKind::Permissive => agent.remove_permissive_inference(inference),
        })
    }

    pub fn add_incompatibility(
        &mut self,
        name: &str,
        incompatibility: Incompatibility,
    ) -> Result<bool, DomainError> {
        Ok(self.find_mut(name)?.add_incompatibility(incompatibility))
    }

    pub fn remove_incompatibility(
        &mut self,
        name: &str,
        incompatibility: &Incompatibility,
    ) -> Result<bool, DomainError> {
        Ok(self.find_mut(name)?.remove_incompatibility(incompatibility))
    }

    pub fn set_intelligence(&mut self, name: &str, intelligence: u32) -> Result<(), DomainError> {
        self.find_mut(name)?.set_intelligence(intelligence);
        Ok(())
    }

    // ==================== Queries ====================

    /// `scorekeeper`'s score on `other`
    pub fn score(&self, scorekeeper: &str, other: &str) -> Result<Score, DomainError> {
        let scorekeeper = self.find(scorekeeper)?;
        let other = self.find(other)?;
        Ok(Score::compute(&self.agents, scorekeeper, other))
    }

    /// Every agent's score on every agent
    pub fn score_all(&self) -> Vec<ScoreCard> {
        score_all(&self.agents)
    }

    /// Full rule and commitment state of one agent
    pub fn describe(&self, name: &str) -> Result<AgentDescription, DomainError> {
        Ok(self.describe_agent(self.find(name)?))
    }

    /// Descriptions of every agent, in the order they joined
    pub fn describe_all(&self) -> Vec<AgentDescription> {
        self.agents
            .iter()
            .map(|a| self.describe_agent(a))
            .collect()
    }

    fn describe_agent(&self, agent: &Agent) -> AgentDescription {
        let challenges_issued = agent
            .challenges_issued()
            .iter()
            .filter_map(|c| {
                self.agent(c.target).map(|target| ChallengeDescription {
                    target: target.name().to_string(),
                    sentence: c.sentence.clone(),
                })
            })
            .collect();

        AgentDescription {
            name: agent.name().to_string(),
            intelligence: agent.intelligence(),
            commitments_avowed: agent.commitments_avowed().clone(),
            incompatibilities: agent.incompatibilities().clone(),
            committive_inferences: agent.committive_inferences().clone(),
            permissive_inferences: agent.permissive_inferences().clone(),
            challenges_issued,
        }
    }

    // ==================== Transcript ====================

    /// Append an exchange to the transcript
    pub fn record(&mut self, input: impl Into<String>, output: impl Into<String>) {
        self.transcript.push(TranscriptEntry::new(input, output));
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::DEFAULT_INTELLIGENCE;
    use crate::rules::incompatibility;

    fn s(text: &str) -> Sentence {
        Sentence::from(text)
    }

    fn two_player_game() -> Game {
        let seed = RuleSeed::default();
        let mut game = Game::new();
        game.add_agent("Ann", &seed, DEFAULT_INTELLIGENCE).unwrap();
        game.add_agent("Bob", &seed, DEFAULT_INTELLIGENCE).unwrap();
        game
    }

    #[test]
    fn test_add_agent_rejects_case_insensitive_duplicate() {
        let mut game = two_player_game();
        let err = game
            .add_agent("ann", &RuleSeed::default(), DEFAULT_INTELLIGENCE)
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateName("ann".to_string()));
        assert_eq!(game.agents().len(), 2);
    }

    #[test]
    fn test_remove_agent() {
        let mut game = two_player_game();
        assert_eq!(game.remove_agent("BOB").unwrap().name(), "Bob");
        assert!(game.agent_named("bob").is_none());
        assert!(game.remove_agent("Bob").unwrap_err().is_not_found());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let game = two_player_game();
        assert_eq!(game.agent_named("aNN").map(Agent::name), Some("Ann"));
        assert!(game.agent_named("Sal").is_none());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut game = two_player_game();
        let bob = game.agent_named("Bob").unwrap().id();
        game.remove_agent("Bob").unwrap();
        let new_bob = game
            .add_agent("Bob", &RuleSeed::default(), DEFAULT_INTELLIGENCE)
            .unwrap();
        assert_ne!(bob, new_bob);
    }

    #[test]
    fn test_unknown_agent_is_not_found() {
        let mut game = two_player_game();
        assert!(game.assert("Sal", "A is red").unwrap_err().is_not_found());
        assert!(game.challenge("Ann", "Sal", "A is red").unwrap_err().is_not_found());
        assert!(game.challenge("Sal", "Ann", "A is red").unwrap_err().is_not_found());
        assert!(game.score("Ann", "Sal").unwrap_err().is_not_found());
        assert!(game.describe("Sal").unwrap_err().is_not_found());
    }

    #[test]
    fn test_invalid_challenge_is_ignored() {
        let mut game = two_player_game();
        assert!(!game.challenge("Ann", "Bob", "A is red").unwrap());
        assert!(game.agent_named("Ann").unwrap().challenges_issued().is_empty());
    }

    #[test]
    fn test_withdraw_missing_challenge_is_noop() {
        let mut game = two_player_game();
        assert!(!game.withdraw_challenge("Ann", "Bob", "A is red").unwrap());
    }

    #[test]
    fn test_self_challenge() {
        let mut game = two_player_game();
        game.assert("Ann", "A is red").unwrap();
        assert!(game.challenge("Ann", "ann", "A is red").unwrap());
        let ents = game.score("Bob", "Ann").unwrap().entitlements;
        assert!(!ents.contains(&s("A is red")));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut game = two_player_game();
        game.assert("Bob", "A is red").unwrap();

        let score = game.score("Ann", "Bob").unwrap();
        assert!(score.commitments.contains(&s("A is colored")));
        assert!(score.incompatibles.is_empty());
        assert!(score.entitlements.contains(&s("A is red")));
        assert!(score.entitlements.contains(&s("A is colored")));

        assert!(game.challenge("Ann", "Bob", "A is red").unwrap());
        let score = game.score("Ann", "Bob").unwrap();
        assert!(!score.entitlements.contains(&s("A is red")));
        assert!(!score.entitlements.contains(&s("A is colored")));
        // commitment does not depend on entitlement
        assert!(score.commitments.contains(&s("A is colored")));

        assert!(game.withdraw_challenge("Ann", "Bob", "A is red").unwrap());
        let score = game.score("Ann", "Bob").unwrap();
        assert!(score.entitlements.contains(&s("A is colored")));
    }

    #[test]
    fn test_challenged_sentence_entitled_via_other_support() {
        let mut game = two_player_game();
        game.assert("Bob", "A is red").unwrap();
        game.assert("Ann", "A is red").unwrap();
        game.challenge("Ann", "Bob", "A is red").unwrap();

        // Ann's own unchallenged avowal keeps "A is red" in the default pool.
        let score = game.score("Ann", "Bob").unwrap();
        assert!(score.entitlements.contains(&s("A is red")));
        assert!(score.entitlements.contains(&s("A is colored")));
    }

    #[test]
    fn test_remove_agent_drops_challenges_against_it() {
        let mut game = two_player_game();
        game.assert("Bob", "A is red").unwrap();
        game.assert("Ann", "A is red").unwrap();
        assert!(game.challenge("Ann", "Bob", "A is red").unwrap());
        assert!(game.challenge("Ann", "Ann", "A is red").unwrap());

        game.remove_agent("Bob").unwrap();
        let ann = game.agent_named("Ann").unwrap();
        assert_eq!(ann.challenges_issued().len(), 1);
        assert!(ann.challenges_issued().iter().all(|c| c.targets(ann.id())));
    }

    #[test]
    fn test_describe_all_follows_join_order() {
        let seed = RuleSeed::default();
        let mut game = Game::new();
        for name in ["Zed", "Ann", "Mia"] {
            game.add_agent(name, &seed, DEFAULT_INTELLIGENCE).unwrap();
        }
        let names: Vec<String> = game.describe_all().into_iter().map(|d| d.name).collect();
        assert_eq!(names, ["Zed", "Ann", "Mia"]);
    }

    #[test]
    fn test_removed_target_makes_challenge_vacuous() {
        let mut game = two_player_game();
        game.assert("Bob", "A is red").unwrap();
        game.challenge("Ann", "Bob", "A is red").unwrap();
        game.remove_agent("Bob").unwrap();
        game.add_agent("Bob", &RuleSeed::default(), DEFAULT_INTELLIGENCE)
            .unwrap();
        game.assert("Bob", "A is red").unwrap();

        let score = game.score("Ann", "Bob").unwrap();
        assert!(score.entitlements.contains(&s("A is red")));
        assert!(game.describe("Ann").unwrap().challenges_issued.is_empty());
    }

    #[test]
    fn test_incompatibility_edits() {
        let mut game = two_player_game();
        game.assert("Bob", "A is red").unwrap();
        game.assert("Bob", "A is yellow").unwrap();
        assert!(game.score("Ann", "Bob").unwrap().incompatibles.is_empty());

        assert!(game
            .add_incompatibility("Ann", incompatibility(["A is red", "A is yellow"]))
            .unwrap());
        assert_eq!(game.score("Ann", "Bob").unwrap().incompatibles.len(), 1);
        // Bob's own view is unaffected by Ann's rules
        assert!(game.score("Bob", "Bob").unwrap().incompatibles.is_empty());

        assert!(game
            .remove_incompatibility("Ann", &incompatibility(["A is yellow", "A is red"]))
            .unwrap());
        assert!(game.score("Ann", "Bob").unwrap().incompatibles.is_empty());
    }

    #[test]
    fn test_inference_edits() {
        let mut game = two_player_game();
        let rule = Inference::new(["A is red", "A is small"], "A is dangerous");
        assert!(game
            .add_inference("Bob", InferenceKind::Committive, rule.clone())
            .unwrap());
        assert!(!game
            .add_inference("Bob", InferenceKind::Committive, rule.clone())
            .unwrap());
        assert!(!game
            .remove_inference("Bob", InferenceKind::Permissive, &rule)
            .unwrap());

        game.assert("Ann", "A is red").unwrap();
        game.assert("Ann", "A is small").unwrap();
        assert!(game
            .score("Bob", "Ann")
            .unwrap()
            .commitments
            .contains(&s("A is dangerous")));
        assert!(!game
            .score("Ann", "Ann")
            .unwrap()
            .commitments
            .contains(&s("A is dangerous")));
    }

    #[test]
    fn test_set_intelligence_limits_commitments() {
        let mut game = two_player_game();
        game.assert("Bob", "A is red").unwrap();
        game.set_intelligence("Ann", 0).unwrap();
        let score = game.score("Ann", "Bob").unwrap();
        assert!(!score.commitments.contains(&s("A is colored")));
    }

    #[test]
    fn test_describe_resolves_challenge_targets() {
        let mut game = two_player_game();
        game.assert("Bob", "A is red").unwrap();
        game.challenge("Ann", "Bob", "A is red").unwrap();

        let description = game.describe("ann").unwrap();
        assert_eq!(description.name, "Ann");
        assert_eq!(description.intelligence, DEFAULT_INTELLIGENCE);
        assert_eq!(
            description.challenges_issued,
            vec![ChallengeDescription {
                target: "Bob".to_string(),
                sentence: s("A is red"),
            }]
        );
        assert_eq!(game.describe_all().len(), 2);
    }

    #[test]
    fn test_transcript_and_reset() {
        let mut game = two_player_game();
        game.record("score", "...");
        game.record("help", "list agents");
        assert_eq!(game.transcript().len(), 2);
        assert_eq!(game.transcript()[1].input, "help");

        game.reset();
        assert!(game.agents().is_empty());
        assert!(game.transcript().is_empty());
    }

    #[test]
    fn test_game_serde_round_trip_keeps_ids() {
        let mut game = two_player_game();
        game.assert("Bob", "A is red").unwrap();
        game.challenge("Ann", "Bob", "A is red").unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let mut restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.score_all(), game.score_all());

        let id = restored
            .add_agent("Sal", &RuleSeed::default(), DEFAULT_INTELLIGENCE)
            .unwrap();
        assert!(game.agents().iter().all(|a| a.id() != id));
    }
}
