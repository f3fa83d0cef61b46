//! Structured results of executing a command

use gogar_domain::{AgentDescription, Score, ScoreCard, Sentence};

/// What happened when a command ran.
///
/// Outcomes carry data, not text; an
/// [`OutcomeRenderer`](crate::ports::outcome_renderer::OutcomeRenderer)
/// decides how they look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Goodbye,
    Help,
    Agents(Vec<AgentDescription>),
    AgentAdded(String),
    AgentRemoved(String),
    NewGame,
    /// A single scorekeeper/other pair
    Score(ScoreCard),
    /// Every ordered pair; the answer to every successful mutation
    Scores(Vec<ScoreCard>),
    /// Disavowal of a sentence the agent never asserted
    NotAsserted {
        agent: String,
        sentence: Sentence,
    },
    /// Challenge of a sentence the target never asserted
    NeverAsserted {
        target: String,
        sentence: Sentence,
    },
    /// An agent's state plus its score on itself
    Described {
        description: AgentDescription,
        self_score: Score,
    },
    DuplicateAgent(String),
    AgentNotFound(String),
    Unrecognized,
}

impl CommandOutcome {
    /// Whether the session should end
    pub fn is_quit(&self) -> bool {
        matches!(self, CommandOutcome::Goodbye)
    }
}

/// An outcome together with its rendered text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    pub outcome: CommandOutcome,
    pub output: String,
}

impl CommandResponse {
    pub fn is_quit(&self) -> bool {
        self.outcome.is_quit()
    }
}
