//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod game;
mod output;
mod repl;

pub use game::FileGameConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use gogar_application::GameConfig;
use gogar_domain::RuleSeed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A problem found in an otherwise well-formed configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("game.starting_agents contains an empty name")]
    EmptyAgentName,

    #[error("game.starting_agents lists {0} more than once")]
    DuplicateAgentName(String),

    #[error("seed.{section} contains an empty sentence")]
    EmptySentence { section: &'static str },

    #[error("seed.{section} contains a rule with no premises")]
    NoPremises { section: &'static str },

    #[error("output.width cannot be 0")]
    ZeroWidth,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// New-game settings
    pub game: FileGameConfig,
    /// Rules every new agent starts with
    pub seed: RuleSeed,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues are warnings: the game still runs with the configuration as
    /// given.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let mut seen: Vec<String> = Vec::new();
        for name in &self.game.starting_agents {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                issues.push(ConfigValidationError::EmptyAgentName);
                continue;
            }
            let lowered = trimmed.to_lowercase();
            if seen.contains(&lowered) {
                issues.push(ConfigValidationError::DuplicateAgentName(trimmed.to_string()));
            } else {
                seen.push(lowered);
            }
        }

        for (section, rules) in [
            ("committive", &self.seed.committive),
            ("permissive", &self.seed.permissive),
        ] {
            for rule in rules {
                if rule.premises.is_empty() {
                    issues.push(ConfigValidationError::NoPremises { section });
                }
                let empty = rule.conclusion.trim().is_empty()
                    || rule.premises.iter().any(|p| p.trim().is_empty());
                if empty {
                    issues.push(ConfigValidationError::EmptySentence { section });
                }
            }
        }

        if self
            .seed
            .incompatibilities
            .iter()
            .flatten()
            .any(|s| s.trim().is_empty())
        {
            issues.push(ConfigValidationError::EmptySentence {
                section: "incompatibilities",
            });
        }

        if self.output.width == 0 {
            issues.push(ConfigValidationError::ZeroWidth);
        }

        issues
    }

    /// The application-level game settings
    pub fn to_game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_intelligence(self.game.intelligence)
            .with_starting_agents(self.game.starting_agents.clone())
            .with_seed(self.seed.clone())
    }
}
