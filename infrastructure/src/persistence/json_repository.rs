//! JSON file storage for a game session.

use gogar_application::GameRepository;
use gogar_domain::Game;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors from reading or writing a saved session
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Session file I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file {path} is not a valid game: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Stores the whole game (agents, challenges, transcript) as pretty JSON.
pub struct JsonGameRepository {
    path: PathBuf,
}

impl JsonGameRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepositoryError {
        RepositoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> RepositoryError {
        RepositoryError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

impl GameRepository for JsonGameRepository {
    type Error = RepositoryError;

    fn load(&self) -> Result<Option<Game>, RepositoryError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let game: Game = serde_json::from_str(&text).map_err(|e| self.json_error(e))?;
        info!(
            path = %self.path.display(),
            agents = game.agents().len(),
            "Session loaded"
        );
        Ok(Some(game))
    }

    fn save(&self, game: &Game) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let text = serde_json::to_string_pretty(game).map_err(|e| self.json_error(e))?;
        fs::write(&self.path, text).map_err(|e| self.io_error(e))?;
        info!(path = %self.path.display(), "Session saved");
        Ok(())
    }
}
