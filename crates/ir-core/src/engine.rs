//! The scenario state machine.

use tracing::debug;

use crate::error::{GameError, GameResult};
use crate::line::Line;
use crate::scenario::ScenarioDefinition;
use crate::scenario::catalog::standard_shift;
use crate::state::PlayerState;

/// Owns the ordered scenarios and applies choices to a [`PlayerState`].
///
/// Every player sees every scenario in the same order; only the effects of
/// the choices differ. While a play-through runs, the engine is the only
/// writer to its `PlayerState`.
#[derive(Debug, Clone)]
pub struct ScenarioEngine {
    scenarios: Vec<ScenarioDefinition>,
}

impl Default for ScenarioEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioEngine {
    /// Create an engine for the standard four-scenario shift.
    pub fn new() -> Self {
        Self::with_scenarios(standard_shift())
    }

    /// Create an engine over a custom scenario list.
    pub fn with_scenarios(scenarios: Vec<ScenarioDefinition>) -> Self {
        Self { scenarios }
    }

    /// Number of scenarios in a play-through.
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// All scenarios, in play order.
    pub fn scenarios(&self) -> &[ScenarioDefinition] {
        &self.scenarios
    }

    /// Get the scenario at a zero-based index.
    pub fn scenario(&self, index: usize) -> GameResult<&ScenarioDefinition> {
        self.scenarios
            .get(index)
            .ok_or(GameError::ScenarioOutOfRange {
                index,
                count: self.scenarios.len(),
            })
    }

    /// Resolve scenario `index` with the one-based `option`.
    ///
    /// Applies the option's effect to `state`, logs the decision and returns
    /// the narrative to display. Scenarios must be resolved in order, once
    /// each: `index` has to equal the number of decisions already logged.
    pub fn apply_choice(
        &self,
        state: &mut PlayerState,
        index: usize,
        option: usize,
    ) -> GameResult<Vec<Line>> {
        let scenario = self.scenario(index)?;
        let chosen = scenario.option(option).ok_or(GameError::InvalidOption {
            scenario: index,
            option,
            available: scenario.option_count(),
        })?;

        let expected = state.scenarios_completed();
        if index != expected {
            return Err(GameError::OutOfSequence {
                expected,
                requested: index,
            });
        }

        chosen.effect.apply(state);
        state.log_decision(&scenario.label, option);

        debug!(
            scenario = %scenario.id,
            option,
            score = state.score,
            reputation = state.reputation,
            minutes = state.time_elapsed_minutes,
            "choice applied"
        );

        Ok(chosen.effect.narrative.clone())
    }

    /// Whether every scenario has been resolved for `state`.
    pub fn is_complete(&self, state: &PlayerState) -> bool {
        state.scenarios_completed() >= self.scenarios.len()
    }
}
