//! Ending classification and debriefs.

use std::fmt;

use serde::Serialize;

use crate::line::{Line, Tone};
use crate::state::PlayerState;

/// Minimum score and reputation for an exemplary ending.
pub const EXEMPLARY_THRESHOLD: (i64, i64) = (180, 80);
/// Minimum score and reputation for a successful ending.
pub const SUCCESS_THRESHOLD: (i64, i64) = (120, 60);
/// Minimum score and reputation to survive.
pub const SURVIVAL_THRESHOLD: (i64, i64) = (60, 40);

/// How the shift ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ending {
    /// Model response.
    Exemplary,
    /// Crisis averted.
    Success,
    /// The company made it, barely.
    Survival,
    /// Catastrophic breach.
    Failure,
}

impl Ending {
    /// Classify a finished play-through.
    ///
    /// Tiers are checked from best to worst and the first whose score and
    /// reputation thresholds are both met wins.
    pub fn classify(state: &PlayerState) -> Self {
        let meets = |(score, reputation): (i64, i64)| {
            state.score >= score && state.reputation >= reputation
        };

        if meets(EXEMPLARY_THRESHOLD) {
            Self::Exemplary
        } else if meets(SUCCESS_THRESHOLD) {
            Self::Success
        } else if meets(SURVIVAL_THRESHOLD) {
            Self::Survival
        } else {
            Self::Failure
        }
    }

    /// Heading shown on the ending screen.
    pub fn title(self) -> &'static str {
        match self {
            Self::Exemplary => "EXEMPLARY RESPONSE - SECURITY HERO!",
            Self::Success => "SUCCESSFUL RESPONSE - CRISIS AVERTED",
            Self::Survival => "SURVIVAL - YOU MADE IT THROUGH... BARELY",
            Self::Failure => "CRITICAL FAILURE - CATASTROPHIC BREACH",
        }
    }

    /// Overall valence of the ending.
    pub fn tone(self) -> Tone {
        match self {
            Self::Exemplary | Self::Success => Tone::Success,
            Self::Survival => Tone::Warning,
            Self::Failure => Tone::Danger,
        }
    }

    /// The outcome and career-impact debrief.
    pub fn debrief(self) -> Vec<Line> {
        let (intro, outcome, career): (Line, Vec<Line>, Vec<Line>) = match self {
            Self::Exemplary => (
                Line::success("Your exceptional incident response saved the company!"),
                vec![
                    Line::success("Incident contained with minimal data loss"),
                    Line::success("Attackers identified and reported to law enforcement"),
                    Line::success("Comprehensive security improvements implemented"),
                    Line::success("Company reputation strengthened by transparent handling"),
                    Line::success("Industry recognition for incident response excellence"),
                ],
                vec![
                    Line::success("You're promoted to Chief Information Security Officer"),
                    Line::success("You're invited to speak at major security conferences"),
                    Line::success("Your response becomes a published case study"),
                ],
            ),
            Self::Success => (
                Line::success("You successfully navigated a major security incident."),
                vec![
                    Line::success("Incident contained with moderate impact"),
                    Line::success("Most critical systems recovered"),
                    Line::success("Security improvements in progress"),
                    Line::warning("Some reputation damage, but the company remains stable"),
                ],
                vec![
                    Line::success("Management recognizes your solid performance"),
                    Line::success("Budget approved for security team expansion"),
                    Line::success("You've proven yourself capable under pressure"),
                ],
            ),
            Self::Survival => (
                Line::warning("The company survives, but it was a close call."),
                vec![
                    Line::warning("Incident eventually contained, with significant damage"),
                    Line::warning("Major data loss and business disruption"),
                    Line::warning("Customer trust damaged"),
                    Line::danger("Legal and regulatory consequences"),
                ],
                vec![
                    Line::warning("You keep your job, but you're on thin ice"),
                    Line::warning("Mandatory additional training required"),
                    Line::warning("Close oversight from senior management"),
                ],
            ),
            Self::Failure => (
                Line::danger("Your incident response was inadequate. The consequences are severe."),
                vec![
                    Line::danger("Widespread system compromise and data loss"),
                    Line::danger("Customer data leaked to the dark web"),
                    Line::danger("Massive regulatory fines incoming"),
                    Line::danger("Company stock price crashes 40%"),
                    Line::danger("Multiple lawsuits filed"),
                ],
                vec![
                    Line::danger("You are asked to resign"),
                    Line::danger("The breach becomes a cautionary tale in the industry"),
                    Line::danger("Time to update your resume..."),
                ],
            ),
        };

        let mut lines = vec![intro, Line::blank(), Line::header("OUTCOME:")];
        lines.extend(outcome);
        lines.push(Line::blank());
        lines.push(Line::header("CAREER IMPACT:"));
        lines.extend(career);
        lines
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exemplary => "EXEMPLARY",
            Self::Success => "SUCCESS",
            Self::Survival => "SURVIVAL",
            Self::Failure => "FAILURE",
        };
        f.write_str(name)
    }
}
