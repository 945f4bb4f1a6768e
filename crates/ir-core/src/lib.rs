//! Core of the incident response training game.
//!
//! A responder works through a fixed sequence of scenarios during a
//! ransomware outbreak. Every choice applies a fixed effect to the
//! [`PlayerState`], and the final state is classified into an [`Ending`].
//! Frontends supply a [`Presenter`] for output and a [`Prompt`] for input;
//! [`GameSession`] drives a play-through between them.

/// Session configuration.
pub mod config;
/// Presenter and prompt capabilities.
pub mod console;
/// Ending classification.
pub mod ending;
/// The scenario state machine.
pub mod engine;
/// Error types for the game.
pub mod error;
/// Narrative lines and tones.
pub mod line;
/// Scenario and option definitions.
pub mod scenario;
/// Play-through driver.
pub mod session;
/// Player state.
pub mod state;

pub use config::SessionConfig;
pub use console::{Presenter, Prompt, ScriptedPrompt};
pub use ending::Ending;
pub use engine::ScenarioEngine;
pub use error::{GameError, GameResult};
pub use line::{Line, Tone};
pub use scenario::{Effect, OptionDefinition, ScenarioDefinition};
pub use session::{GameSession, RunSummary};
pub use state::PlayerState;
