//! Text command grammar
//!
//! The conversational front end of the game: one line of text becomes one
//! [`Command`] against the engine.

pub mod parser;

pub use parser::{Command, CommandParser, GrammarError, RuleEdit};

/// Sample commands, one per grammar form, shown by `help`
pub const EXAMPLE_COMMANDS: &[&str] = &[
    "list agents",
    "add agent Sal",
    "remove agent Bob",
    "new game",
    "score",
    "Bob's score on Ann",
    "Bob asserts A is red",
    "Bob disavows A is red",
    "Ann challenges Bob's entitlement to A is red",
    "Ann abandons her challenge to Bob's entitlement to A is red",
    "Bob adds committive inference: A is red; A is small |- A is dangerous",
    "Bob adds incompatibility: {A is red; A is yellow}",
    "Ann removes incompatibility: {A is blue; A is red}",
    "Ann removes permissive inference: A is small; A is blue |- A is edible",
    "Ann sets intelligence to 3",
    "Ann",
    "help",
    "quit",
];
