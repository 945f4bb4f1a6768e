//! The state change applied when an option is chosen.

use crate::line::Line;
use crate::state::PlayerState;

/// Deterministic consequence of picking an option.
///
/// Score, reputation and time are added to the player's totals.
/// Containment and systems affected, when present, replace the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effect {
    /// Added to the score.
    pub score_delta: i64,
    /// Added to reputation.
    pub reputation_delta: i64,
    /// Minutes added to the clock.
    pub time_delta: u32,
    /// Overwrites the containment level.
    pub containment_set: Option<u32>,
    /// Overwrites the affected-systems count.
    pub systems_affected_set: Option<u32>,
    /// Narrative shown after the choice is made.
    pub narrative: Vec<Line>,
}

impl Effect {
    /// An effect that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score delta.
    pub fn with_score(mut self, delta: i64) -> Self {
        self.score_delta = delta;
        self
    }

    /// Set the reputation delta.
    pub fn with_reputation(mut self, delta: i64) -> Self {
        self.reputation_delta = delta;
        self
    }

    /// Set the minutes the choice takes. The clock saturates at `u32::MAX`.
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.time_delta = minutes;
        self
    }

    /// Overwrite containment with this level.
    pub fn with_containment(mut self, level: u32) -> Self {
        self.containment_set = Some(level);
        self
    }

    /// Overwrite the affected-systems count.
    pub fn with_systems_affected(mut self, count: u32) -> Self {
        self.systems_affected_set = Some(count);
        self
    }

    /// Append a narrative line.
    pub fn with_line(mut self, line: Line) -> Self {
        self.narrative.push(line);
        self
    }

    /// Apply the deltas and overwrites to `state`.
    pub fn apply(&self, state: &mut PlayerState) {
        state.score += self.score_delta;
        state.reputation += self.reputation_delta;
        state.time_elapsed_minutes = state.time_elapsed_minutes.saturating_add(self.time_delta);
        if let Some(level) = self.containment_set {
            state.containment_level = level;
        }
        if let Some(count) = self.systems_affected_set {
            state.systems_affected = count;
        }
    }
}
