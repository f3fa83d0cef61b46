//! Transcript of a game session

use serde::{Deserialize, Serialize};

/// One exchange: what the caller sent and what it was answered with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub input: String,
    pub output: String,
}

impl TranscriptEntry {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}
