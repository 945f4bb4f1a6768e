//! Player state threaded through a play-through.

use serde::Serialize;

/// Reputation every responder starts a shift with.
pub const STARTING_REPUTATION: i64 = 100;

/// The responder's accumulated state for one play-through.
///
/// Created fresh for every run. Nothing here is clamped: reputation can
/// climb past 100 and both score and reputation can go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    /// Running score.
    pub score: i64,
    /// Company reputation, as a percentage.
    pub reputation: i64,
    /// Minutes elapsed since the first alert.
    pub time_elapsed_minutes: u32,
    /// How contained the incident is, as a percentage.
    pub containment_level: u32,
    /// Number of systems the attack has reached.
    pub systems_affected: u32,
    /// One `"<label>: <option>"` entry per resolved scenario, in play order.
    pub decision_log: Vec<String>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            score: 0,
            reputation: STARTING_REPUTATION,
            time_elapsed_minutes: 0,
            containment_level: 0,
            systems_affected: 0,
            decision_log: Vec::new(),
        }
    }
}

impl PlayerState {
    /// Create the state for a new shift.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scenarios resolved so far.
    pub fn scenarios_completed(&self) -> usize {
        self.decision_log.len()
    }

    /// Record the option picked for a scenario.
    pub fn log_decision(&mut self, label: &str, option: usize) {
        self.decision_log.push(format!("{label}: {option}"));
    }

    /// Whole hours elapsed, rounded down.
    pub fn hours_elapsed(&self) -> u32 {
        self.time_elapsed_minutes / 60
    }
}
