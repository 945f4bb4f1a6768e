//! Play-through driver.
//!
//! `GameSession` walks a fresh [`PlayerState`] through every scenario,
//! asking the [`Prompt`] for each decision and sending all text to the
//! [`Presenter`]. Replays always start from a new state.

use serde::Serialize;
use tracing::info;

use crate::config::SessionConfig;
use crate::console::{Presenter, Prompt, RULE_WIDTH};
use crate::ending::Ending;
use crate::engine::ScenarioEngine;
use crate::error::GameResult;
use crate::line::Line;
use crate::scenario::ScenarioDefinition;
use crate::state::PlayerState;

/// Question asked after the ending screen.
pub const REPLAY_QUESTION: &str =
    "Would you like to play again and try a different approach? (y/n)";

/// Printed when the player stops playing.
pub const FAREWELL: &str = "Thanks for playing! Stay vigilant, security professional!";

/// The result of one complete play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// How the shift ended.
    pub ending: Ending,
    /// Final state, including the decision log.
    pub state: PlayerState,
}

/// Runs play-throughs of the scenario sequence.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    engine: ScenarioEngine,
    config: SessionConfig,
}

impl GameSession {
    /// Create a session over the standard shift.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_engine(ScenarioEngine::new(), config)
    }

    /// Create a session over a specific engine.
    pub fn with_engine(engine: ScenarioEngine, config: SessionConfig) -> Self {
        Self { engine, config }
    }

    /// The scenario engine.
    pub fn engine(&self) -> &ScenarioEngine {
        &self.engine
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Play until the player declines a replay.
    pub fn run(
        &self,
        presenter: &mut impl Presenter,
        prompt: &mut impl Prompt,
    ) -> GameResult<Vec<RunSummary>> {
        let mut summaries = Vec::new();
        loop {
            summaries.push(self.play_once(presenter, prompt)?);
            if !self.config.offer_replay {
                break;
            }
            presenter.show(&[Line::blank()])?;
            if !prompt.confirm(REPLAY_QUESTION)? {
                break;
            }
        }

        presenter.show(&[Line::blank(), Line::info(FAREWELL), Line::blank()])?;
        Ok(summaries)
    }

    /// Play the scenario sequence once with a fresh state.
    pub fn play_once(
        &self,
        presenter: &mut impl Presenter,
        prompt: &mut impl Prompt,
    ) -> GameResult<RunSummary> {
        if self.config.briefing {
            presenter.clear()?;
            presenter.show(&banner())?;
            presenter.show(&briefing())?;
            presenter.separator()?;
            prompt.pause("Press ENTER to begin your shift...")?;
        }

        let mut state = PlayerState::new();
        let count = self.engine.scenario_count();

        for index in 0..count {
            let scenario = self.engine.scenario(index)?;
            present_scenario(presenter, scenario, &state)?;

            let choice = prompt.choose(1, scenario.option_count())?;
            let narrative = self.engine.apply_choice(&mut state, index, choice)?;
            presenter.show(&[Line::blank()])?;
            presenter.show(&narrative)?;

            if self.config.pauses {
                let message = if index + 1 == count {
                    "Press ENTER to see final results..."
                } else {
                    "Press ENTER to continue..."
                };
                prompt.pause(message)?;
            }
        }

        let ending = Ending::classify(&state);
        info!(
            %ending,
            score = state.score,
            reputation = state.reputation,
            minutes = state.time_elapsed_minutes,
            "play-through complete"
        );

        presenter.clear()?;
        presenter.show(&banner())?;
        presenter.show(&[Line::new(ending.title(), ending.tone())])?;
        presenter.separator()?;
        presenter.show(&[Line::blank()])?;
        presenter.show(&ending.debrief())?;
        presenter.show(&[Line::blank()])?;
        presenter.separator()?;
        presenter.show(&final_report(&state))?;
        presenter.separator()?;

        Ok(RunSummary { ending, state })
    }
}

fn present_scenario(
    presenter: &mut impl Presenter,
    scenario: &ScenarioDefinition,
    state: &PlayerState,
) -> GameResult<()> {
    presenter.show(&[Line::blank()])?;
    presenter.separator()?;
    presenter.show(&[Line::header(scenario.title.as_str())])?;
    presenter.separator()?;
    presenter.show(&[Line::blank()])?;

    let body: Vec<Line> = scenario.body.lines().map(Line::info).collect();
    presenter.narrate(&body)?;

    let mut lines = vec![
        Line::blank(),
        status_line(state),
        Line::blank(),
        Line::header(scenario.question.as_str()),
        Line::blank(),
    ];
    lines.extend(
        scenario
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| Line::info(format!("{}. {}", i + 1, option.label))),
    );
    presenter.show(&lines)
}

fn banner() -> Vec<Line> {
    let rule = "=".repeat(RULE_WIDTH);
    let title = format!("{:^width$}", "INCIDENT RESPONSE: THE GAME", width = RULE_WIDTH);
    vec![
        Line::header(rule.clone()),
        Line::header(title.trim_end()),
        Line::header(rule),
        Line::blank(),
    ]
}

fn briefing() -> Vec<Line> {
    vec![
        Line::header("MISSION BRIEFING"),
        Line::blank(),
        Line::info("You are the lead incident responder for CyberCorp Industries."),
        Line::info("Your decisions will determine the fate of the company."),
        Line::blank(),
        Line::header("HOW TO PLAY:"),
        Line::success("  - Read each scenario carefully"),
        Line::success("  - Choose your response by entering its number (1, 2, 3, ...)"),
        Line::success("  - Your choices affect the outcome and your final score"),
        Line::success("  - There are multiple endings based on your decisions"),
        Line::blank(),
        Line::header("SCORING:"),
        Line::warning("  - Quick, effective responses earn more points"),
        Line::warning("  - Poor choices cost points and damage reputation"),
        Line::warning("  - Your goal: contain the incident and protect the company"),
        Line::blank(),
    ]
}

fn status_line(state: &PlayerState) -> Line {
    Line::warning(format!(
        "Time Elapsed: {} minutes | Score: {} | Reputation: {}%",
        state.time_elapsed_minutes, state.score, state.reputation
    ))
}

fn final_report(state: &PlayerState) -> Vec<Line> {
    let mut lines = vec![
        Line::blank(),
        Line::header("FINAL STATISTICS:"),
        Line::warning(format!("  Total Score: {} points", state.score)),
        Line::warning(format!("  Final Reputation: {}%", state.reputation)),
        Line::warning(format!(
            "  Time to Resolution: {} minutes ({} hours)",
            state.time_elapsed_minutes,
            state.hours_elapsed()
        )),
        Line::warning(format!("  Containment Level: {}%", state.containment_level)),
        Line::warning(format!("  Systems Affected: {}", state.systems_affected)),
        Line::blank(),
        Line::header("YOUR DECISION PATH:"),
    ];
    lines.extend(
        state
            .decision_log
            .iter()
            .map(|decision| Line::info(format!("  - {decision}"))),
    );
    lines.push(Line::blank());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedPrompt;
    use crate::error::GameError;
    use crate::line::Tone;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<Line>,
        narrated: usize,
        clears: usize,
    }

    impl Recorder {
        fn contains(&self, text: &str) -> bool {
            self.lines.iter().any(|l| l.text.contains(text))
        }
    }

    impl Presenter for Recorder {
        fn show(&mut self, lines: &[Line]) -> GameResult<()> {
            self.lines.extend_from_slice(lines);
            Ok(())
        }

        fn narrate(&mut self, lines: &[Line]) -> GameResult<()> {
            self.narrated += lines.len();
            self.show(lines)
        }

        fn clear(&mut self) -> GameResult<()> {
            self.clears += 1;
            Ok(())
        }
    }

    /// Answers a fixed script and says "yes" to a fixed number of replays.
    struct Replaying {
        script: ScriptedPrompt,
        replays: usize,
        pauses: usize,
    }

    impl Prompt for Replaying {
        fn choose(&mut self, min: usize, max: usize) -> GameResult<usize> {
            self.script.choose(min, max)
        }

        fn pause(&mut self, _message: &str) -> GameResult<()> {
            self.pauses += 1;
            Ok(())
        }

        fn confirm(&mut self, _question: &str) -> GameResult<bool> {
            if self.replays == 0 {
                return Ok(false);
            }
            self.replays -= 1;
            Ok(true)
        }
    }

    #[test]
    fn scripted_exemplary_run() {
        let session = GameSession::new(SessionConfig::scripted());
        let mut presenter = Recorder::default();
        let mut prompt = ScriptedPrompt::new([3, 1, 4, 4]);

        let summary = session.play_once(&mut presenter, &mut prompt).unwrap();

        assert_eq!(summary.ending, Ending::Exemplary);
        assert_eq!(summary.state.score, 220);
        assert_eq!(summary.state.reputation, 155);
        assert_eq!(summary.state.time_elapsed_minutes, 175);
        assert_eq!(summary.state.decision_log.len(), 4);
        assert!(presenter.contains(Ending::Exemplary.title()));
        assert!(presenter.contains("Time to Resolution: 175 minutes (2 hours)"));
        assert!(presenter.contains("  - Ransom: 4"));
    }

    #[test]
    fn worst_path_reaches_failure() {
        let session = GameSession::new(SessionConfig::scripted());
        let mut presenter = Recorder::default();
        let mut prompt = ScriptedPrompt::new([4, 4, 1, 1]);

        let summary = session.play_once(&mut presenter, &mut prompt).unwrap();

        assert_eq!(summary.state.score, -50 - 20 - 30 + 25);
        assert_eq!(summary.state.reputation, 100 - 40 - 30 - 25);
        assert_eq!(summary.ending, Ending::Failure);
        assert!(
            presenter
                .lines
                .iter()
                .any(|l| l.tone == Tone::Danger && l.text == Ending::Failure.title())
        );
    }

    #[test]
    fn every_scenario_is_presented() {
        let session = GameSession::new(SessionConfig::scripted());
        let mut presenter = Recorder::default();
        let mut prompt = ScriptedPrompt::new([2, 2, 2, 2]);

        session.play_once(&mut presenter, &mut prompt).unwrap();

        for scenario in session.engine().scenarios() {
            assert!(presenter.contains(&scenario.title));
            assert!(presenter.contains(&scenario.question));
        }
        assert!(presenter.narrated > 0);
        assert!(presenter.contains("Time Elapsed: 0 minutes | Score: 0 | Reputation: 100%"));
        assert!(presenter.contains("Time Elapsed: 25 minutes | Score: 10 | Reputation: 100%"));
    }

    #[test]
    fn briefing_and_pauses() {
        let session = GameSession::new(SessionConfig::default().with_replay(false));
        let mut presenter = Recorder::default();
        let mut prompt = Replaying {
            script: ScriptedPrompt::new([1, 1, 1, 1]),
            replays: 0,
            pauses: 0,
        };

        session.play_once(&mut presenter, &mut prompt).unwrap();

        assert!(presenter.contains("MISSION BRIEFING"));
        assert_eq!(prompt.pauses, 5);
        assert_eq!(presenter.clears, 2);
    }

    #[test]
    fn replay_starts_from_fresh_state() {
        let session = GameSession::new(SessionConfig::scripted().with_replay(true));
        let mut presenter = Recorder::default();
        let mut prompt = Replaying {
            script: ScriptedPrompt::new([3, 1, 4, 4, 4, 4, 4, 4]),
            replays: 1,
            pauses: 0,
        };

        let summaries = session.run(&mut presenter, &mut prompt).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].ending, Ending::Exemplary);
        assert_eq!(summaries[1].state.decision_log.len(), 4);
        assert_eq!(summaries[1].state.score, -50 - 20 + 60 + 70);
        assert!(presenter.contains(FAREWELL));
    }

    #[test]
    fn no_replay_offered_when_disabled() {
        let session = GameSession::new(SessionConfig::scripted());
        let mut presenter = Recorder::default();
        let mut prompt = Replaying {
            script: ScriptedPrompt::new([3, 1, 4, 4]),
            replays: 5,
            pauses: 0,
        };

        let summaries = session.run(&mut presenter, &mut prompt).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(prompt.replays, 5);
    }

    #[test]
    fn interrupted_mid_run() {
        let session = GameSession::new(SessionConfig::scripted());
        let mut presenter = Recorder::default();
        let mut prompt = ScriptedPrompt::new([3, 1]);

        let err = session.play_once(&mut presenter, &mut prompt).unwrap_err();
        assert!(matches!(err, GameError::Interrupted));
    }

    #[test]
    fn summary_serializes() {
        let session = GameSession::new(SessionConfig::scripted());
        let mut presenter = Recorder::default();
        let mut prompt = ScriptedPrompt::new([3, 1, 4, 4]);
        let summary = session.play_once(&mut presenter, &mut prompt).unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["ending"], "exemplary");
        assert_eq!(json["state"]["score"], 220);
        assert_eq!(json["state"]["decision_log"][0], "Initial Response: 3");
    }

    #[test]
    fn banner_is_centered() {
        let lines = banner();
        assert_eq!(lines[0].text.len(), RULE_WIDTH);
        assert!(lines[1].text.trim_start().starts_with("INCIDENT RESPONSE"));
        assert!(lines[1].text.starts_with(' '));
    }
}
