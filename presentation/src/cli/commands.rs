//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for gogar
#[derive(Parser, Debug)]
#[command(name = "gogar")]
#[command(author, version, about = "GOGAR - the game of giving and asking for reasons")]
#[command(long_about = r#"
GOGAR simulates deontic scorekeeping: agents assert sentences, challenge
each other's entitlements, and keep score on what everyone is committed
and entitled to under their own inference rules.

Without -e, an interactive session starts. Type `help` for sample commands.

Configuration files are loaded from (in priority order):
1. GOGAR_* environment variables (GOGAR_GAME__INTELLIGENCE=3)
2. --config <path>     Explicit config file
3. ./gogar.toml        Project-level config
4. ~/.config/gogar/config.toml   Global config

Example:
  gogar
  gogar -e "Bob asserts A is red" -e "Ann challenges Bob's entitlement to A is red"
  gogar --session game.json --transcript game.jsonl
"#)]
pub struct Cli {
    /// Run a command and print its answer instead of starting the REPL
    /// (can be specified multiple times)
    #[arg(short, long, value_name = "COMMAND")]
    pub execute: Vec<String>,

    /// Load the game from this file at start and save it on exit
    #[arg(long, value_name = "PATH")]
    pub session: Option<PathBuf>,

    /// Append every command and its answer to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether commands come from `-e` rather than the terminal
    pub fn is_batch(&self) -> bool {
        !self.execute.is_empty()
    }
}
