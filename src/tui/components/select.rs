//! Single selection component.

use super::render::{cursor_down, cursor_marker, cursor_up, header};
use crate::tui::{Command, Model, Msg};

/// One-of-N choice via cursor navigation.
///
/// Terminates on confirm (`enter` or space) with the choice under the
/// cursor, or on cancel (`ctrl+c` or `q`). An empty choice list is valid:
/// navigation and confirm do nothing and only cancel ends the prompt.
#[derive(Debug, Clone)]
pub struct Select {
    choices: Vec<String>,
    title: String,
    message: String,
    cursor: usize,
    selected: Option<String>,
    interrupted: bool,
}

impl Select {
    /// Creates a new select prompt with the cursor on the first choice.
    #[must_use]
    pub fn new<I, S>(choices: I, title: impl Into<String>, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            title: title.into(),
            message: message.into(),
            cursor: 0,
            selected: None,
            interrupted: false,
        }
    }

    /// Sets the initial cursor position, clamped to the list.
    #[must_use]
    pub fn with_starting_cursor(mut self, index: usize) -> Self {
        self.cursor = index.min(self.choices.len().saturating_sub(1));
        self
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Index under the cursor, or `None` for an empty list.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        (!self.choices.is_empty()).then_some(self.cursor)
    }

    /// The confirmed choice, once the prompt finished with a selection.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn into_selected(self) -> Option<String> {
        self.selected
    }

    /// True when the prompt was cancelled.
    #[must_use]
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    /// True once either a selection was made or the prompt was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.interrupted || self.selected.is_some()
    }
}

impl Model for Select {
    fn update(&mut self, msg: Msg) -> Option<Command> {
        if self.is_finished() {
            return None;
        }

        let key = msg.key_string()?;
        match key.as_str() {
            "ctrl+c" | "q" => {
                self.interrupted = true;
                Some(Command::Quit)
            }
            "up" | "k" => {
                self.cursor = cursor_up(self.cursor);
                None
            }
            "down" | "j" => {
                self.cursor = cursor_down(self.cursor, self.choices.len());
                None
            }
            "enter" | " " => {
                let choice = self.choices.get(self.cursor)?;
                self.selected = Some(choice.clone());
                Some(Command::Quit)
            }
            _ => None,
        }
    }

    fn view(&self) -> String {
        let mut s = header(&self.title, &self.message);

        for (idx, choice) in self.choices.iter().enumerate() {
            s.push_str(&format!("{} {choice}\n", cursor_marker(idx == self.cursor)));
        }

        s.push_str("\nPress q or Ctrl+C to quit, Enter to select\n");
        s
    }
}
