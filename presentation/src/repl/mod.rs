//! Interactive game session

pub mod game_repl;

pub use game_repl::{GameRepl, LineResult};
