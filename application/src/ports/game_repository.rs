//! Game repository port
//!
//! Saving and restoring a whole [`Game`] between runs. Implementations
//! live in the infrastructure layer.

use gogar_domain::Game;

/// Repository trait for persisted game sessions
pub trait GameRepository {
    /// Error type for repository operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the stored game, or `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<Game>, Self::Error>;

    /// Store the game, replacing any previous save
    fn save(&self, game: &Game) -> Result<(), Self::Error>;
}
