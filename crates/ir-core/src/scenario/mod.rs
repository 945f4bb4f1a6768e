//! Scenario and option definitions.
//!
//! Scenarios are built once when the engine is created and never change
//! afterwards. The standard four-scenario shift lives in [`catalog`].

pub mod catalog;
mod effect;

pub use effect::Effect;

/// One response the player can pick in a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    /// Text shown in the option list.
    pub label: String,
    /// What happens when it is picked.
    pub effect: Effect,
}

impl OptionDefinition {
    /// Create an option with its effect.
    pub fn new(label: impl Into<String>, effect: Effect) -> Self {
        Self {
            label: label.into(),
            effect,
        }
    }
}

/// A fixed decision point in the shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioDefinition {
    /// Stable identifier.
    pub id: String,
    /// Heading shown above the situation.
    pub title: String,
    /// Short name used in the decision log.
    pub label: String,
    /// The situation the responder faces.
    pub body: String,
    /// The question asked before the options.
    pub question: String,
    /// Available responses, numbered from 1 in this order.
    pub options: Vec<OptionDefinition>,
}

impl ScenarioDefinition {
    /// Create a scenario with no options yet.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        label: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            label: label.into(),
            body: body.into(),
            question: String::new(),
            options: Vec::new(),
        }
    }

    /// Set the question.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Add an option.
    pub fn with_option(mut self, label: impl Into<String>, effect: Effect) -> Self {
        self.options.push(OptionDefinition::new(label, effect));
        self
    }

    /// Look up an option by its one-based number.
    pub fn option(&self, number: usize) -> Option<&OptionDefinition> {
        number.checked_sub(1).and_then(|i| self.options.get(i))
    }

    /// Number of options offered.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}
