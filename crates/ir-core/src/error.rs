//! Error types for the incident response game.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a play-through.
#[derive(Debug, Error)]
pub enum GameError {
    /// A scenario index outside the fixed sequence was requested.
    #[error("scenario {index} does not exist (only {count} scenarios)")]
    ScenarioOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// Number of scenarios in the engine.
        count: usize,
    },

    /// The chosen option number is not offered by the scenario.
    #[error("option {option} is not available in scenario {scenario} (choose 1-{available})")]
    InvalidOption {
        /// Zero-based scenario index.
        scenario: usize,
        /// The one-based option number that was chosen.
        option: usize,
        /// Number of options the scenario offers.
        available: usize,
    },

    /// A choice was applied for a scenario other than the next unresolved one.
    #[error("scenario {requested} cannot be resolved now; scenario {expected} is next")]
    OutOfSequence {
        /// Index of the next unresolved scenario.
        expected: usize,
        /// Index that was passed in.
        requested: usize,
    },

    /// The player closed the input stream mid-run.
    #[error("game interrupted")]
    Interrupted,

    /// A scripted answer falls outside the range the scenario accepts.
    #[error("scripted choice {choice} is outside {min}-{max}")]
    ScriptedChoiceOutOfRange {
        /// The queued answer.
        choice: usize,
        /// Lowest accepted answer.
        min: usize,
        /// Highest accepted answer.
        max: usize,
    },

    /// Terminal I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
