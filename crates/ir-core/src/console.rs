//! The two capabilities a play-through needs from its frontend.

use std::collections::VecDeque;

use crate::error::{GameError, GameResult};
use crate::line::Line;

/// Width of the separator rule.
pub const RULE_WIDTH: usize = 70;

/// Renders lines of text to the player.
pub trait Presenter {
    /// Display lines as-is.
    fn show(&mut self, lines: &[Line]) -> GameResult<()>;

    /// Display a scenario's situation text. Frontends may pace it out.
    fn narrate(&mut self, lines: &[Line]) -> GameResult<()> {
        self.show(lines)
    }

    /// Start a fresh screen.
    fn clear(&mut self) -> GameResult<()> {
        Ok(())
    }

    /// Draw a horizontal rule.
    fn separator(&mut self) -> GameResult<()> {
        self.show(&[Line::info("-".repeat(RULE_WIDTH))])
    }
}

/// Collects the player's decisions.
pub trait Prompt {
    /// Block until the player picks a number in `min..=max`.
    ///
    /// Implementations re-ask on bad input and never return a value out of
    /// range. A closed input stream is [`GameError::Interrupted`].
    fn choose(&mut self, min: usize, max: usize) -> GameResult<usize>;

    /// Wait for the player to acknowledge `message`.
    fn pause(&mut self, message: &str) -> GameResult<()>;

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str) -> GameResult<bool>;
}

/// A [`Prompt`] that answers from a fixed list of choices.
///
/// Pauses return immediately and every yes/no question is answered "no".
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    choices: VecDeque<usize>,
}

impl ScriptedPrompt {
    /// Create a prompt that will answer with `choices`, in order.
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn choose(&mut self, min: usize, max: usize) -> GameResult<usize> {
        let choice = self.choices.pop_front().ok_or(GameError::Interrupted)?;
        if (min..=max).contains(&choice) {
            Ok(choice)
        } else {
            Err(GameError::ScriptedChoiceOutOfRange { choice, min, max })
        }
    }

    fn pause(&mut self, _message: &str) -> GameResult<()> {
        Ok(())
    }

    fn confirm(&mut self, _question: &str) -> GameResult<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<Line>);

    impl Presenter for Recorder {
        fn show(&mut self, lines: &[Line]) -> GameResult<()> {
            self.0.extend_from_slice(lines);
            Ok(())
        }
    }

    #[test]
    fn scripted_answers_in_order() {
        let mut prompt = ScriptedPrompt::new([3, 1]);
        assert_eq!(prompt.choose(1, 4).unwrap(), 3);
        assert_eq!(prompt.choose(1, 4).unwrap(), 1);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn exhausted_script_interrupts() {
        let mut prompt = ScriptedPrompt::default();
        assert!(matches!(prompt.choose(1, 4), Err(GameError::Interrupted)));
    }

    #[test]
    fn scripted_answer_out_of_range() {
        let mut prompt = ScriptedPrompt::new([7]);
        assert!(matches!(
            prompt.choose(1, 4),
            Err(GameError::ScriptedChoiceOutOfRange { choice: 7, min: 1, max: 4 })
        ));
    }

    #[test]
    fn scripted_never_replays() {
        let mut prompt = ScriptedPrompt::new([1]);
        assert!(!prompt.confirm("again?").unwrap());
        prompt.pause("continue").unwrap();
        assert_eq!(prompt.remaining(), 1);
    }

    #[test]
    fn default_separator_and_narration() {
        let mut recorder = Recorder::default();
        recorder.separator().unwrap();
        recorder.narrate(&[Line::info("story")]).unwrap();
        recorder.clear().unwrap();

        assert_eq!(recorder.0.len(), 2);
        assert_eq!(recorder.0[0].text.len(), RULE_WIDTH);
        assert_eq!(recorder.0[1].text, "story");
    }
}
