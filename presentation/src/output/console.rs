//! Console output formatter for game outcomes

use crate::config::OutputConfig;
use colored::Colorize;
use gogar_application::{CommandOutcome, EXAMPLE_COMMANDS, OutcomeRenderer};
use gogar_domain::{AgentDescription, Score, ScoreCard};
use std::fmt::Display;

const WELCOME: &str = "
Welcome to the game of giving and asking for reasons,
a simulation of the linguistic scorekeeping dynamics
described in chapter 3 of Robert Brandom's book
Making It Explicit (Harvard University Press, 1994).

For a list of sample commands, type help

";

const WELCOME_BACK: &str = "Welcome back!  You can start where you left off,
or start a new game by typing 'new game'
";

const INDENT: &str = "  ";
const SEPARATOR: &str = ", ";

/// Formats command outcomes as plain text for the terminal
#[derive(Debug, Clone)]
pub struct ConsoleFormatter {
    color: bool,
    width: usize,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}

impl ConsoleFormatter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            color: config.color,
            width: config.width,
        }
    }

    /// Banner shown at startup and after `new game`
    pub fn welcome(&self) -> String {
        WELCOME.to_string()
    }

    /// Greeting for a resumed session
    pub fn welcome_back(&self) -> String {
        WELCOME_BACK.to_string()
    }

    /// Sample commands, one per line
    pub fn help(&self) -> String {
        format!("\n{}\n\n", EXAMPLE_COMMANDS.join("\n"))
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// A labelled list line, wrapped
    fn field(&self, label: &str, value: impl Display) -> String {
        format!("\n{}", wrap(&format!("{}{}", label, value), self.width))
    }

    /// Commitments, entitlements and incompatibles, ending in a blank line
    pub fn score(&self, score: &Score) -> String {
        let mut output = String::new();
        output.push_str(&self.field("Commitments:  ", &score.commitments));
        output.push_str(&self.field("Entitlements: ", &score.entitlements));
        output.push_str(&self.field(
            "Incompatibles: ",
            join(score.incompatibles.iter(), "; "),
        ));
        output.push_str("\n\n");
        output
    }

    pub fn score_card(&self, card: &ScoreCard) -> String {
        format!(
            "{}{}",
            self.heading(&format!("{}'s score on {}", card.scorekeeper, card.other)),
            self.score(&card.score)
        )
    }

    /// Everything an agent holds, one field per line
    pub fn agent(&self, agent: &AgentDescription) -> String {
        let mut output = self.heading(&agent.name);
        output.push_str(&format!("\nIntelligence = {}", agent.intelligence));
        output.push_str(&self.field("Commitments avowed: ", &agent.commitments_avowed));
        output.push_str(&self.field(
            "Sets taken to be incompatible: ",
            join(agent.incompatibilities.iter(), "; "),
        ));
        output.push_str(&self.field(
            "Committive inferences accepted: ",
            join(agent.committive_inferences.iter(), "; "),
        ));
        output.push_str(&self.field(
            "Permissive inferences accepted: ",
            join(agent.permissive_inferences.iter(), "; "),
        ));
        output.push_str(&self.field(
            "Challenges issued: ",
            join(agent.challenges_issued.iter(), "; "),
        ));
        output.push('\n');
        output
    }
}

impl OutcomeRenderer for ConsoleFormatter {
    fn render(&self, outcome: &CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Goodbye => "Goodbye.\n".to_string(),
            CommandOutcome::Help => self.help(),
            CommandOutcome::Agents(agents) => agents
                .iter()
                .map(|a| self.agent(a))
                .collect::<Vec<_>>()
                .join("\n"),
            CommandOutcome::AgentAdded(name) => format!("Agent {} added.\n", name),
            CommandOutcome::AgentRemoved(name) => format!("Agent {} removed.\n", name),
            CommandOutcome::NewGame => self.welcome(),
            CommandOutcome::Score(card) => self.score(&card.score),
            CommandOutcome::Scores(cards) => {
                cards.iter().map(|c| self.score_card(c)).collect()
            }
            CommandOutcome::NotAsserted { agent, sentence } => self.warning(&format!(
                "Agent {} has not asserted \"{}\"\n",
                agent, sentence
            )),
            CommandOutcome::NeverAsserted { target, sentence } => {
                self.warning(&format!("{} never asserted \"{}\"\n", target, sentence))
            }
            CommandOutcome::Described {
                description,
                self_score,
            } => format!("{}\n{}", self.agent(description), self.score(self_score)),
            CommandOutcome::DuplicateAgent(name) => {
                self.warning(&format!("An agent named {} already exists.\n", name))
            }
            CommandOutcome::AgentNotFound(name) => self.warning(&format!(
                "Agent {} not found.  Try: list agents\n",
                name
            )),
            CommandOutcome::Unrecognized => {
                self.warning("Command not recognized.  Try: help\n")
            }
        }
    }
}

fn join<T: Display>(items: impl Iterator<Item = T>, separator: &str) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Break a `, `/`; `-separated line so no line runs past `width`.
///
/// Pieces are rejoined with `, ` and continuation lines are indented by two
/// spaces. A single piece longer than `width` is never split.
pub fn wrap(text: &str, width: usize) -> String {
    let mut output = String::new();
    let mut pos = 0;
    let pieces = text.split("; ").flat_map(|part| part.split(SEPARATOR));
    for (i, piece) in pieces.enumerate() {
        if i > 0 {
            output.push_str(SEPARATOR);
            pos += SEPARATOR.len();
        }
        if pos != 0 && pos + piece.len() + SEPARATOR.len() > width {
            // drop the separator's trailing space before breaking
            output.pop();
            output.push('\n');
            output.push_str(INDENT);
            pos = INDENT.len();
        }
        output.push_str(piece);
        pos += piece.len();
    }
    output
}
