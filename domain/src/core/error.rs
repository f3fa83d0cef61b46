//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Only agent-directory lookups can fail. Every other edge case in the
/// scorekeeping world (challenging an unasserted sentence, removing a rule
/// that is not held, ...) is a silent no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("An agent named {0} already exists")]
    DuplicateName(String),

    #[error("There is no agent named {0}")]
    NotFound(String),
}

impl DomainError {
    /// Check if this error is a failed agent lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}
