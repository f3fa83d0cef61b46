//! REPL (Read-Eval-Print Loop) for an interactive game

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use gogar_application::PlayGameUseCase;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// Print this and keep reading
    Continue(String),
    /// Print this and stop
    Quit(String),
    /// Nothing to do
    Skip,
}

/// Interactive game REPL
pub struct GameRepl {
    use_case: PlayGameUseCase<ConsoleFormatter>,
    config: ReplConfig,
    resumed: bool,
}

impl GameRepl {
    /// Create a new GameRepl
    pub fn new(use_case: PlayGameUseCase<ConsoleFormatter>, config: ReplConfig) -> Self {
        Self {
            use_case,
            config,
            resumed: false,
        }
    }

    /// Mark the game as loaded from a saved session
    pub fn with_resumed(mut self, resumed: bool) -> Self {
        self.resumed = resumed;
        self
    }

    /// Give back the use case, and with it the game, once the loop is done
    pub fn into_use_case(self) -> PlayGameUseCase<ConsoleFormatter> {
        self.use_case
    }

    /// Greeting printed before the first prompt
    pub fn greeting(&self) -> String {
        let formatter = self.use_case.renderer();
        if self.resumed {
            formatter.welcome_back()
        } else {
            formatter.welcome()
        }
    }

    /// Run one line through the game
    pub fn process_line(&mut self, line: &str) -> LineResult {
        let line = line.trim();
        if line.is_empty() {
            return LineResult::Skip;
        }
        let response = self.use_case.execute(line);
        if response.is_quit() {
            LineResult::Quit(response.output)
        } else {
            LineResult::Continue(response.output)
        }
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create history directory {}: {}", parent.display(), e);
            return editor;
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => {
                debug!(path = %path.display(), "Using history file");
                editor.with_history(Box::new(history))
            }
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.config.prompt.clone()),
            DefaultPromptSegment::Empty,
        );

        print!("{}", self.greeting());

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(buffer) => match self.process_line(&buffer) {
                    LineResult::Continue(output) => print!("{}", output),
                    LineResult::Quit(output) => {
                        print!("{}", output);
                        break;
                    }
                    LineResult::Skip => {}
                },
                // The editor has already cleared the line
                Signal::CtrlC => continue,
                Signal::CtrlD => {
                    println!("Goodbye.");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gogar_application::GameConfig;

    fn repl() -> GameRepl {
        let use_case =
            PlayGameUseCase::new_game(GameConfig::default(), ConsoleFormatter::default()).unwrap();
        GameRepl::new(use_case, ReplConfig::default())
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut repl = repl();
        assert_eq!(repl.process_line("   "), LineResult::Skip);
        assert!(repl.into_use_case().game().transcript().is_empty());
    }

    #[test]
    fn test_lines_are_trimmed_and_executed() {
        let mut repl = repl();
        let LineResult::Continue(output) = repl.process_line("  add agent Sal  ") else {
            panic!("expected output");
        };
        assert_eq!(output, "Agent Sal added.\n");
        let use_case = repl.into_use_case();
        assert_eq!(use_case.game().transcript()[0].input, "add agent Sal");
    }

    #[test]
    fn test_quit_stops() {
        let mut repl = repl();
        assert_eq!(repl.process_line("exit"), LineResult::Quit("Goodbye.\n".to_string()));
    }

    #[test]
    fn test_greeting_depends_on_resume() {
        assert!(repl().greeting().contains("giving and asking for reasons"));
        assert!(repl().with_resumed(true).greeting().starts_with("Welcome back!"));
    }
}
