//! Game configuration from TOML (`[game]` section)

use gogar_domain::DEFAULT_INTELLIGENCE;
use serde::{Deserialize, Serialize};

/// Raw game configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Intelligence given to every new agent
    pub intelligence: u32,
    /// Agents present at the start of each new game
    pub starting_agents: Vec<String>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            intelligence: DEFAULT_INTELLIGENCE,
            starting_agents: vec!["Ann".to_string(), "Bob".to_string()],
        }
    }
}
