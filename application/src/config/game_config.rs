//! Game configuration

use gogar_domain::{DEFAULT_INTELLIGENCE, RuleSeed};
use serde::{Deserialize, Serialize};

/// How new agents and new games are set up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Intelligence given to every new agent
    pub intelligence: u32,
    /// Agents present at the start of a new game
    pub starting_agents: Vec<String>,
    /// Rules every new agent starts with
    pub seed: RuleSeed,
}

impl GameConfig {
    pub fn with_intelligence(mut self, intelligence: u32) -> Self {
        self.intelligence = intelligence;
        self
    }

    pub fn with_starting_agents(mut self, names: Vec<String>) -> Self {
        self.starting_agents = names;
        self
    }

    pub fn with_seed(mut self, seed: RuleSeed) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            intelligence: DEFAULT_INTELLIGENCE,
            starting_agents: vec!["Ann".to_string(), "Bob".to_string()],
            seed: RuleSeed::default(),
        }
    }
}
