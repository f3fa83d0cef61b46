//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording each command and
//! its rendered answer to a durable, machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! diagnostic messages, while this port captures the game transcript
//! itself. The in-memory transcript on [`gogar_domain::Game`] is kept
//! either way.

/// One exchange to be logged
#[derive(Debug, Clone, Copy)]
pub struct TranscriptEvent<'a> {
    /// Event type identifier (e.g., "command", "session_start")
    pub event_type: &'static str,
    /// The raw input line
    pub input: &'a str,
    /// The rendered answer
    pub output: &'a str,
}

impl<'a> TranscriptEvent<'a> {
    /// A command and its answer
    pub fn command(input: &'a str, output: &'a str) -> Self {
        Self {
            event_type: "command",
            input,
            output,
        }
    }
}

/// Port for logging transcript events.
///
/// The `log` method is synchronous and non-fallible so that a broken log
/// never interrupts the game; implementations swallow their own errors.
pub trait TranscriptLogger: Send + Sync {
    /// Record one exchange.
    fn log(&self, event: TranscriptEvent<'_>);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent<'_>) {}
}
