//! Command grammar
//!
//! Turns one line of text ("Bob asserts A is red") into a [`Command`].
//! Patterns are tried in a fixed order and the first match wins; a line
//! matching nothing is [`Command::Unrecognized`], never an error. So is a
//! line whose sentence or sentence list comes out empty once quotes and
//! separators are stripped.
//!
//! | Pattern | Command |
//! |---------|---------|
//! | `quit`, `exit` | [`Command::Quit`] |
//! | `help` | [`Command::Help`] |
//! | `[list] agents` | [`Command::ListAgents`] |
//! | `add agent Sal` | [`Command::AddAgent`] |
//! | `remove agent Sal` | [`Command::RemoveAgent`] |
//! | `new game` | [`Command::NewGame`] |
//! | `score of Ann on Bob`, `Ann's score on Bob` | [`Command::Score`] |
//! | `score` | [`Command::ScoreAll`] |
//! | `Bob asserts A is red` | [`Command::Assert`] |
//! | `Bob disavows A is red` | [`Command::Disavow`] |
//! | `Ann challenges Bob's entitlement to A is red` | [`Command::Challenge`] |
//! | `Ann withdraws her challenge to Bob's entitlement to A is red` | [`Command::WithdrawChallenge`] |
//! | `Bob adds committive inference: A is red; A is small \|- A is dangerous` | [`Command::EditInference`] |
//! | `Bob adds incompatibility: {A is red; A is yellow}` | [`Command::EditIncompatibility`] |
//! | `Ann sets intelligence to 3` | [`Command::SetIntelligence`] |
//! | `Ann` | [`Command::Describe`] |

use gogar_domain::{Incompatibility, Inference, InferenceKind, Sentence, incompatibility};
use regex::{Captures, Regex};
use thiserror::Error;

/// A pattern in the grammar failed to compile
#[derive(Error, Debug)]
#[error("Invalid command pattern: {0}")]
pub struct GrammarError(#[from] regex::Error);

/// Whether a rule edit adds or removes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEdit {
    Add,
    Remove,
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    ListAgents,
    AddAgent(String),
    RemoveAgent(String),
    NewGame,
    Score {
        scorekeeper: String,
        other: String,
    },
    ScoreAll,
    Assert {
        agent: String,
        sentence: Sentence,
    },
    Disavow {
        agent: String,
        sentence: Sentence,
    },
    Challenge {
        issuer: String,
        target: String,
        sentence: Sentence,
    },
    WithdrawChallenge {
        issuer: String,
        target: String,
        sentence: Sentence,
    },
    EditInference {
        agent: String,
        edit: RuleEdit,
        kind: InferenceKind,
        inference: Inference,
    },
    EditIncompatibility {
        agent: String,
        edit: RuleEdit,
        incompatibility: Incompatibility,
    },
    SetIntelligence {
        agent: String,
        intelligence: u32,
    },
    Describe(String),
    Unrecognized,
}

// An agent name, optionally quoted.
const NAME: &str = r#""?(\w+)"?"#;
// A sentence runs up to an optional final period.
const SENTENCE: &str = r"([^.]+)\.?";

/// Compiled command patterns
#[derive(Debug, Clone)]
pub struct CommandParser {
    quit: Regex,
    help: Regex,
    agents: Regex,
    add_agent: Regex,
    remove_agent: Regex,
    new_game: Regex,
    score_of: Regex,
    score_possessive: Regex,
    score_all: Regex,
    asserts: Regex,
    disavows: Regex,
    challenges: Regex,
    withdraws: Regex,
    inference: Regex,
    incompatibility: Regex,
    intelligence: Regex,
    describe: Regex,
}

impl CommandParser {
    pub fn new() -> Result<Self, GrammarError> {
        let line = |body: &str| Regex::new(&format!(r"^\s*{}\s*$", body));
        Ok(Self {
            quit: line("(?:quit|exit)")?,
            help: line("help")?,
            agents: line(r"(?:list)?\s*agents")?,
            add_agent: line(&format!(r"add\s*agent\s+{NAME}"))?,
            remove_agent: line(&format!(r"remove\s*agent\s+{NAME}"))?,
            new_game: line(r"new\s*game")?,
            score_of: line(&format!(r"score\s+of\s+{NAME}\s+on\s+{NAME}"))?,
            score_possessive: line(&format!(r"{NAME}'s\s+score\s+on\s+{NAME}"))?,
            score_all: line("score")?,
            asserts: line(&format!(r"{NAME}\s+asserts:?\s*{SENTENCE}"))?,
            disavows: line(&format!(r"{NAME}\s+disavows:?\s*{SENTENCE}"))?,
            challenges: line(&format!(
                r"{NAME}\s+challenges\s+{NAME}(?:'s\s+entitlement\s+to)?\s+{SENTENCE}"
            ))?,
            withdraws: line(&format!(
                r"{NAME}\s+(?:abandons|withdraws)\s+(?:his\s+|her\s+|its\s+|their\s+)?challenge\s+(?:to\s+)?{NAME}(?:'s\s+entitlement\s+to)?\s+{SENTENCE}"
            ))?,
            inference: line(&format!(
                r"{NAME}\s+(adds|removes)\s+(committive|permissive)\s+inference:?\s+[\[{{]?\s*([^\[\]{{}}|]+?)\s*[\]}}]?\s*\|-\s*{SENTENCE}"
            ))?,
            incompatibility: line(&format!(
                r"{NAME}\s+(adds|removes)\s+incompatibility:?\s+[\[{{]?\s*([^\[\]{{}}.]+?)\s*[\]}}]?\s*\.?"
            ))?,
            intelligence: line(&format!(
                r"{NAME}\s+sets\s+intelligence\s+(?:to\s+)?(\d+)\.?"
            ))?,
            describe: line(NAME)?,
        })
    }

    /// Parse one line of input
    pub fn parse(&self, input: &str) -> Command {
        if self.quit.is_match(input) {
            return Command::Quit;
        }
        if self.help.is_match(input) {
            return Command::Help;
        }
        if self.agents.is_match(input) {
            return Command::ListAgents;
        }
        if let Some(caps) = self.add_agent.captures(input) {
            return Command::AddAgent(text(&caps, 1));
        }
        if let Some(caps) = self.remove_agent.captures(input) {
            return Command::RemoveAgent(text(&caps, 1));
        }
        if self.new_game.is_match(input) {
            return Command::NewGame;
        }
        if let Some(caps) = self
            .score_of
            .captures(input)
            .or_else(|| self.score_possessive.captures(input))
        {
            return Command::Score {
                scorekeeper: text(&caps, 1),
                other: text(&caps, 2),
            };
        }
        if self.score_all.is_match(input) {
            return Command::ScoreAll;
        }
        if let Some(caps) = self.asserts.captures(input) {
            return sentence(&caps, 2).map_or(Command::Unrecognized, |sentence| {
                Command::Assert {
                    agent: text(&caps, 1),
                    sentence,
                }
            });
        }
        if let Some(caps) = self.disavows.captures(input) {
            return sentence(&caps, 2).map_or(Command::Unrecognized, |sentence| {
                Command::Disavow {
                    agent: text(&caps, 1),
                    sentence,
                }
            });
        }
        if let Some(caps) = self.challenges.captures(input) {
            return sentence(&caps, 3).map_or(Command::Unrecognized, |sentence| {
                Command::Challenge {
                    issuer: text(&caps, 1),
                    target: text(&caps, 2),
                    sentence,
                }
            });
        }
        if let Some(caps) = self.withdraws.captures(input) {
            return sentence(&caps, 3).map_or(Command::Unrecognized, |sentence| {
                Command::WithdrawChallenge {
                    issuer: text(&caps, 1),
                    target: text(&caps, 2),
                    sentence,
                }
            });
        }
        if let Some(caps) = self.inference.captures(input) {
            let kind = if &caps[3] == "permissive" {
                InferenceKind::Permissive
            } else {
                InferenceKind::Committive
            };
            let (Some(premises), Some(conclusion)) =
                (split_sentences(&caps[4]), sentence(&caps, 5))
            else {
                return Command::Unrecognized;
            };
            return Command::EditInference {
                agent: text(&caps, 1),
                edit: edit(&caps, 2),
                kind,
                inference: Inference::new(premises, conclusion),
            };
        }
        if let Some(caps) = self.incompatibility.captures(input) {
            return split_sentences(&caps[3]).map_or(Command::Unrecognized, |members| {
                Command::EditIncompatibility {
                    agent: text(&caps, 1),
                    edit: edit(&caps, 2),
                    incompatibility: incompatibility(members),
                }
            });
        }
        if let Some(caps) = self.intelligence.captures(input) {
            // Out-of-range budgets fall through to Unrecognized
            if let Ok(intelligence) = caps[2].parse() {
                return Command::SetIntelligence {
                    agent: text(&caps, 1),
                    intelligence,
                };
            }
            return Command::Unrecognized;
        }
        if let Some(caps) = self.describe.captures(input) {
            return Command::Describe(text(&caps, 1));
        }
        Command::Unrecognized
    }
}

fn remove_quotes(s: &str) -> String {
    s.replace('"', "").trim().to_string()
}

fn text(caps: &Captures<'_>, group: usize) -> String {
    caps.get(group)
        .map(|m| remove_quotes(m.as_str()))
        .unwrap_or_default()
}

fn sentence(caps: &Captures<'_>, group: usize) -> Option<Sentence> {
    let text = text(caps, group);
    (!text.is_empty()).then(|| Sentence::new(text))
}

fn edit(caps: &Captures<'_>, group: usize) -> RuleEdit {
    if caps.get(group).map(|m| m.as_str()) == Some("removes") {
        RuleEdit::Remove
    } else {
        RuleEdit::Add
    }
}

/// Split a `,`/`;` separated list into sentences, dropping empty items.
/// `None` if nothing is left.
fn split_sentences(list: &str) -> Option<Vec<Sentence>> {
    let sentences: Vec<Sentence> = list
        .split([',', ';'])
        .map(remove_quotes)
        .filter(|s| !s.is_empty())
        .map(Sentence::new)
        .collect();
    (!sentences.is_empty()).then_some(sentences)
}
