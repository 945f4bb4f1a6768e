//! Terminal presenter and stdin prompt.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use ir_core::{GameError, GameResult, Line, Presenter, Prompt, Tone};

/// How the terminal frontend renders output.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Emit ANSI colours.
    pub color: bool,
    /// Delay between characters when narrating. Zero prints lines at once.
    pub typewriter: Duration,
    /// Clear the screen between sections.
    pub clear_screen: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            color: true,
            typewriter: Duration::from_millis(20),
            clear_screen: true,
        }
    }
}

impl TerminalConfig {
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_typewriter_ms(mut self, millis: u64) -> Self {
        self.typewriter = Duration::from_millis(millis);
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color || text.is_empty() {
        return text.to_string();
    }
    let painted = match tone {
        Tone::Info => text.cyan(),
        Tone::Success => text.green(),
        Tone::Warning => text.yellow(),
        Tone::Danger => text.red(),
        Tone::Header => text.bold().cyan(),
    };
    painted.to_string()
}

/// Writes lines to a terminal, colouring them by tone.
pub struct TerminalPresenter<W: Write> {
    out: W,
    config: TerminalConfig,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, config: TerminalConfig) -> Self {
        Self { out, config }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show(&mut self, lines: &[Line]) -> GameResult<()> {
        for line in lines {
            writeln!(self.out, "{}", paint(&line.text, line.tone, self.config.color))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn narrate(&mut self, lines: &[Line]) -> GameResult<()> {
        if self.config.typewriter.is_zero() {
            return self.show(lines);
        }
        let mut buf = [0u8; 4];
        for line in lines {
            for ch in line.text.chars() {
                let glyph = ch.encode_utf8(&mut buf);
                write!(self.out, "{}", paint(glyph, line.tone, self.config.color))?;
                self.out.flush()?;
                thread::sleep(self.config.typewriter);
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> GameResult<()> {
        if self.config.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Discards everything. Used when only the JSON summary is wanted.
pub struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn show(&mut self, _lines: &[Line]) -> GameResult<()> {
        Ok(())
    }
}

/// Parse a typed choice. Only plain digits in `min..=max` are accepted.
pub fn parse_choice(input: &str, min: usize, max: usize) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed
        .parse()
        .ok()
        .filter(|n| (min..=max).contains(n))
}

/// Reads decisions line by line, re-asking until the input is valid.
pub struct TerminalPrompt<R: BufRead, W: Write> {
    input: R,
    out: W,
    color: bool,
    line: String,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, out: W, color: bool) -> Self {
        Self {
            input,
            out,
            color,
            line: String::new(),
        }
    }

    fn emphasis(&self, text: &str) -> String {
        if self.color {
            text.bold().green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Read one line. `None` means the input stream is closed.
    fn read(&mut self) -> GameResult<Option<&str>> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim()))
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn choose(&mut self, min: usize, max: usize) -> GameResult<usize> {
        loop {
            let label = self.emphasis("Your decision: ");
            write!(self.out, "\n{label}")?;
            self.out.flush()?;

            let input = self.read()?.ok_or(GameError::Interrupted)?;
            if let Some(choice) = parse_choice(input, min, max) {
                return Ok(choice);
            }

            let warning = format!("Invalid choice. Please enter a number between {min} and {max}");
            writeln!(self.out, "{}", paint(&warning, Tone::Danger, self.color))?;
        }
    }

    fn pause(&mut self, message: &str) -> GameResult<()> {
        let message = if self.color {
            message.bold().to_string()
        } else {
            message.to_string()
        };
        write!(self.out, "\n{message}")?;
        self.out.flush()?;
        self.read()?.ok_or(GameError::Interrupted)?;
        Ok(())
    }

    fn confirm(&mut self, question: &str) -> GameResult<bool> {
        let question = self.emphasis(question);
        write!(self.out, "{question} ")?;
        self.out.flush()?;
        let answer = self.read()?.map(str::to_lowercase);
        Ok(matches!(answer.as_deref(), Some("y" | "yes")))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn plain() -> TerminalConfig {
        TerminalConfig::default()
            .with_color(false)
            .with_typewriter_ms(0)
            .with_clear_screen(false)
    }

    fn prompt(input: &str) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    #[test]
    fn parse_valid_choices() {
        assert_eq!(parse_choice("3", 1, 4), Some(3));
        assert_eq!(parse_choice("  1\n", 1, 4), Some(1));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(parse_choice("", 1, 4), None);
        assert_eq!(parse_choice("0", 1, 4), None);
        assert_eq!(parse_choice("5", 1, 4), None);
        assert_eq!(parse_choice("-1", 1, 4), None);
        assert_eq!(parse_choice("two", 1, 4), None);
        assert_eq!(parse_choice("1.5", 1, 4), None);
        assert_eq!(parse_choice("99999999999999999999999", 1, 4), None);
    }

    #[test]
    fn choose_reprompts_until_valid() {
        let mut prompt = prompt("abc\n9\n2\n");
        assert_eq!(prompt.choose(1, 4).unwrap(), 2);

        let out = String::from_utf8(prompt.out).unwrap();
        assert_eq!(out.matches("Invalid choice").count(), 2);
        assert!(out.contains("between 1 and 4"));
    }

    #[test]
    fn choose_interrupted_on_eof() {
        let mut prompt = prompt("x\n");
        assert!(matches!(prompt.choose(1, 4), Err(GameError::Interrupted)));
    }

    #[test]
    fn pause_waits_for_enter() {
        let mut prompt = prompt("\n");
        prompt.pause("Press ENTER to continue...").unwrap();
        assert!(matches!(
            prompt.pause("again"),
            Err(GameError::Interrupted)
        ));
    }

    #[test]
    fn confirm_accepts_yes() {
        assert!(prompt("y\n").confirm("again?").unwrap());
        assert!(prompt("YES\n").confirm("again?").unwrap());
        assert!(!prompt("n\n").confirm("again?").unwrap());
        assert!(!prompt("").confirm("again?").unwrap());
    }

    #[test]
    fn plain_presenter_output() {
        let mut presenter = TerminalPresenter::new(Vec::new(), plain());
        presenter
            .show(&[Line::header("TITLE"), Line::danger("bad news")])
            .unwrap();
        presenter.narrate(&[Line::info("story")]).unwrap();
        presenter.clear().unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(out, "TITLE\nbad news\nstory\n");
    }

    #[test]
    fn typewriter_writes_every_character() {
        let config = plain().with_typewriter_ms(1);
        let mut presenter = TerminalPresenter::new(Vec::new(), config);
        presenter.narrate(&[Line::info("héllo"), Line::blank()]).unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(out, "héllo\n\n");
    }

    #[test]
    fn paint_respects_color_flag() {
        assert_eq!(paint("x", Tone::Danger, false), "x");
        assert_eq!(paint("", Tone::Danger, true), "");
    }
}
