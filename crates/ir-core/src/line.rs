//! Presentation-neutral narrative text.

use serde::Serialize;

/// Semantic tag attached to a line of output. Presenters map it to styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Neutral information.
    Info,
    /// A good outcome.
    Success,
    /// A mixed or cautionary outcome.
    Warning,
    /// A bad outcome.
    Danger,
    /// Section headings and banners.
    Header,
}

/// A single line of text with its tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// The text to display, free of styling codes.
    pub text: String,
    /// How the line should be styled.
    pub tone: Tone,
}

impl Line {
    /// Create a line with an explicit tone.
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// Create an informational line.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Info)
    }

    /// Create a success line.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Success)
    }

    /// Create a warning line.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Warning)
    }

    /// Create a danger line.
    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Danger)
    }

    /// Create a header line.
    pub fn header(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Header)
    }

    /// An empty spacer line.
    pub fn blank() -> Self {
        Self::info("")
    }

    /// Whether this line is an empty spacer.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_tone() {
        assert_eq!(Line::info("a").tone, Tone::Info);
        assert_eq!(Line::success("a").tone, Tone::Success);
        assert_eq!(Line::warning("a").tone, Tone::Warning);
        assert_eq!(Line::danger("a").tone, Tone::Danger);
        assert_eq!(Line::header("a").tone, Tone::Header);
    }

    #[test]
    fn blank_line() {
        assert!(Line::blank().is_blank());
        assert!(!Line::info("x").is_blank());
    }
}
