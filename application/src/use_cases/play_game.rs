//! Play Game use case.
//!
//! Drives one game session from lines of text:
//!
//! 1. Parse the line with the [`CommandParser`]
//! 2. Apply the [`Command`] to the [`Game`]
//! 3. Render the [`CommandOutcome`] via the [`OutcomeRenderer`] port
//! 4. Append `(input, output)` to the game transcript and the
//!    [`TranscriptLogger`]
//!
//! Every successful mutation is answered with the full score table.
//! Lookup failures become outcomes rather than errors so the conversation
//! keeps going.

use super::outcome::{CommandOutcome, CommandResponse};
use crate::command::{Command, CommandParser, GrammarError, RuleEdit};
use crate::config::GameConfig;
use crate::ports::outcome_renderer::OutcomeRenderer;
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use gogar_domain::{DomainError, Game, ScoreCard};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for playing a game session.
pub struct PlayGameUseCase<R: OutcomeRenderer> {
    game: Game,
    config: GameConfig,
    parser: CommandParser,
    renderer: R,
    transcript_logger: Arc<dyn TranscriptLogger>,
}

impl<R: OutcomeRenderer> PlayGameUseCase<R> {
    /// Create a use case around an existing game
    pub fn new(game: Game, config: GameConfig, renderer: R) -> Result<Self, GrammarError> {
        Ok(Self {
            game,
            config,
            parser: CommandParser::new()?,
            renderer,
            transcript_logger: Arc::new(NoTranscriptLogger),
        })
    }

    /// Create a use case with a freshly set-up game
    pub fn new_game(config: GameConfig, renderer: R) -> Result<Self, GrammarError> {
        let mut use_case = Self::new(Game::new(), config, renderer)?;
        use_case.start_new_game();
        Ok(use_case)
    }

    /// Set the transcript logger
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript_logger = logger;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Reset the game and add the configured starting agents
    pub fn start_new_game(&mut self) {
        self.game.reset();
        for name in &self.config.starting_agents {
            if let Err(e) = self
                .game
                .add_agent(name, &self.config.seed, self.config.intelligence)
            {
                warn!("Skipping starting agent: {}", e);
            }
        }
        info!(agents = self.game.agents().len(), "New game started");
    }

    /// Parse, run, render and record one line of input
    pub fn execute(&mut self, input: &str) -> CommandResponse {
        let command = self.parser.parse(input);
        debug!(?command, "Parsed command");

        let outcome = self.run(command);
        let output = self.renderer.render(&outcome);

        self.game.record(input, output.as_str());
        self.transcript_logger
            .log(TranscriptEvent::command(input, &output));

        CommandResponse { outcome, output }
    }

    /// Apply a parsed command to the game
    pub fn run(&mut self, command: Command) -> CommandOutcome {
        match self.apply(command) {
            Ok(outcome) => outcome,
            Err(DomainError::DuplicateName(name)) => CommandOutcome::DuplicateAgent(name),
            Err(DomainError::NotFound(name)) => CommandOutcome::AgentNotFound(name),
        }
    }

    fn scores(&self) -> CommandOutcome {
        CommandOutcome::Scores(self.game.score_all())
    }

    fn canonical_name(&self, name: &str) -> String {
        self.game
            .agent_named(name)
            .map(|a| a.name().to_string())
            .unwrap_or_else(|| name.to_string())
    }

    fn apply(&mut self, command: Command) -> Result<CommandOutcome, DomainError> {
        let outcome = match command {
            Command::Quit => CommandOutcome::Goodbye,
            Command::Help => CommandOutcome::Help,
            Command::ListAgents => CommandOutcome::Agents(self.game.describe_all()),
            Command::AddAgent(name) => {
                self.game
                    .add_agent(&name, &self.config.seed, self.config.intelligence)?;
                CommandOutcome::AgentAdded(name)
            }
            Command::RemoveAgent(name) => {
                self.game.remove_agent(&name)?;
                CommandOutcome::AgentRemoved(name)
            }
            Command::NewGame => {
                self.start_new_game();
                CommandOutcome::NewGame
            }
            Command::Score { scorekeeper, other } => {
                let score = self.game.score(&scorekeeper, &other)?;
                CommandOutcome::Score(ScoreCard {
                    scorekeeper: self.canonical_name(&scorekeeper),
                    other: self.canonical_name(&other),
                    score,
                })
            }
            Command::ScoreAll => self.scores(),
            Command::Assert { agent, sentence } => {
                self.game.assert(&agent, sentence)?;
                self.scores()
            }
            Command::Disavow { agent, sentence } => {
                if self.game.disavow(&agent, &sentence)? {
                    self.scores()
                } else {
                    CommandOutcome::NotAsserted {
                        agent: self.canonical_name(&agent),
                        sentence,
                    }
                }
            }
            Command::Challenge {
                issuer,
                target,
                sentence,
            } => {
                if self.game.challenge(&issuer, &target, sentence.clone())? {
                    self.scores()
                } else if self
                    .game
                    .agent_named(&target)
                    .is_some_and(|t| t.avows(&sentence))
                {
                    // Already on record; nothing changed
                    self.scores()
                } else {
                    CommandOutcome::NeverAsserted {
                        target: self.canonical_name(&target),
                        sentence,
                    }
                }
            }
            Command::WithdrawChallenge {
                issuer,
                target,
                sentence,
            } => {
                self.game.withdraw_challenge(&issuer, &target, sentence)?;
                self.scores()
            }
            Command::EditInference {
                agent,
                edit,
                kind,
                inference,
            } => {
                match edit {
                    RuleEdit::Add => self.game.add_inference(&agent, kind, inference)?,
                    RuleEdit::Remove => self.game.remove_inference(&agent, kind, &inference)?,
                };
                self.scores()
            }
            Command::EditIncompatibility {
                agent,
                edit,
                incompatibility,
            } => {
                match edit {
                    RuleEdit::Add => self.game.add_incompatibility(&agent, incompatibility)?,
                    RuleEdit::Remove => {
                        self.game.remove_incompatibility(&agent, &incompatibility)?
                    }
                };
                self.scores()
            }
            Command::SetIntelligence {
                agent,
                intelligence,
            } => {
                self.game.set_intelligence(&agent, intelligence)?;
                self.scores()
            }
            Command::Describe(name) => match self.game.describe(&name) {
                Ok(description) => {
                    let self_score = self.game.score(&name, &name)?;
                    CommandOutcome::Described {
                        description,
                        self_score,
                    }
                }
                // A lone word that names nobody is not a command
                Err(DomainError::NotFound(_)) => CommandOutcome::Unrecognized,
                Err(e) => return Err(e),
            },
            Command::Unrecognized => CommandOutcome::Unrecognized,
        };
        Ok(outcome)
    }
}
