//! Session persistence
//!
//! Provides [`JsonGameRepository`], which implements the
//! [`GameRepository`](gogar_application::GameRepository) port.

mod json_repository;

pub use json_repository::{JsonGameRepository, RepositoryError};
