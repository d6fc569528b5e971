//! Text input prompt.

use std::time::Duration;

use derive_more::Display;

use super::text_field::TextField;
use crate::tui::{Command, Model, Msg};

const HINT: &str = "(esc to cancel, enter to accept)";

/// How a text prompt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Outcome {
    /// Still running
    #[default]
    #[display("pending")]
    Pending,
    /// Finished with `enter`
    #[display("accepted")]
    Accepted,
    /// Finished with `esc` or `ctrl+c`
    #[display("cancelled")]
    Cancelled,
}

/// Free-text prompt.
///
/// Character editing is left to the wrapped [`TextField`]; this model only
/// frames it and decides when the prompt is over.
#[derive(Debug)]
pub struct TextInput {
    field: TextField,
    prompt: String,
    last_error: Option<anyhow::Error>,
    outcome: Outcome,
}

impl TextInput {
    /// Creates a focused text prompt.
    ///
    /// `char_limit` and `width` of zero mean unlimited.
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        placeholder: impl Into<String>,
        char_limit: usize,
        width: usize,
    ) -> Self {
        let mut field = TextField::new()
            .with_placeholder(placeholder)
            .with_char_limit(char_limit)
            .with_width(width);
        field.focus();

        Self {
            field,
            prompt: prompt.into(),
            last_error: None,
            outcome: Outcome::Pending,
        }
    }

    #[must_use]
    pub fn with_blink_interval(mut self, interval: Duration) -> Self {
        self.field = self.field.with_blink_interval(interval);
        self
    }

    /// Starts with `value` already in the buffer.
    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.field = self.field.with_value(value);
        self
    }

    /// Current buffer contents, whatever the outcome.
    #[must_use]
    pub fn value(&self) -> &str {
        self.field.value()
    }

    #[must_use]
    pub fn field(&self) -> &TextField {
        &self.field
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True when the prompt was cancelled.
    #[must_use]
    pub fn interrupted(&self) -> bool {
        self.outcome == Outcome::Cancelled
    }

    /// The most recent error reported through the loop. Never cleared.
    #[must_use]
    pub fn last_error(&self) -> Option<&anyhow::Error> {
        self.last_error.as_ref()
    }

    /// The accepted text, or `None` if the prompt did not end with `enter`.
    #[must_use]
    pub fn into_value(self) -> Option<String> {
        (self.outcome == Outcome::Accepted).then(|| self.field.value().to_string())
    }
}

impl Model for TextInput {
    fn init(&mut self) -> Option<Command> {
        Some(self.field.blink())
    }

    fn update(&mut self, msg: Msg) -> Option<Command> {
        if self.outcome != Outcome::Pending {
            return None;
        }

        match msg.key_string().as_deref() {
            Some("enter") => {
                self.outcome = Outcome::Accepted;
                return Some(Command::Quit);
            }
            Some("ctrl+c" | "esc") => {
                self.outcome = Outcome::Cancelled;
                return Some(Command::Quit);
            }
            _ => {}
        }

        if let Msg::Error(e) = msg {
            self.last_error = Some(e);
            return None;
        }

        self.field.update(msg)
    }

    fn view(&self) -> String {
        let mut s = format!("{}\n\n{}\n\n{HINT}\n", self.prompt, self.field.view());
        if let Some(e) = &self.last_error {
            s.push_str(&format!("\nerror: {e}\n"));
        }
        s
    }
}
