//! Configuration for a game session.

/// Controls the parts of a play-through that are not scenario logic.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Show the mission briefing before the first scenario.
    pub briefing: bool,
    /// Wait for the player after each scenario's outcome.
    pub pauses: bool,
    /// Ask whether to play again after the ending.
    pub offer_replay: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            briefing: true,
            pauses: true,
            offer_replay: true,
        }
    }
}

impl SessionConfig {
    /// Configuration for a non-interactive run: no briefing, pauses, or replay.
    pub fn scripted() -> Self {
        Self {
            briefing: false,
            pauses: false,
            offer_replay: false,
        }
    }

    /// Show or skip the mission briefing.
    pub fn with_briefing(mut self, briefing: bool) -> Self {
        self.briefing = briefing;
        self
    }

    /// Enable or disable the pause after each outcome.
    pub fn with_pauses(mut self, pauses: bool) -> Self {
        self.pauses = pauses;
        self
    }

    /// Offer or skip the replay question.
    pub fn with_replay(mut self, offer_replay: bool) -> Self {
        self.offer_replay = offer_replay;
        self
    }
}
