//! Sentence value object

use serde::{Deserialize, Serialize};

/// An atomic proposition (Value Object)
///
/// Sentences are opaque: the engine never looks inside them and compares
/// them only for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence(String);

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the sentence text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Sentence {
    fn from(s: &str) -> Self {
        Sentence::new(s)
    }
}

impl From<String> for Sentence {
    fn from(s: String) -> Self {
        Sentence::new(s)
    }
}

impl From<&String> for Sentence {
    fn from(s: &String) -> Self {
        Sentence::new(s.as_str())
    }
}
