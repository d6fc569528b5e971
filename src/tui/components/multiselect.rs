//! Multi-selection component with toggle support.

use std::collections::BTreeSet;

use super::render::{checkbox, cursor_down, cursor_marker, cursor_up, header};
use crate::tui::{Command, Model, Msg};

/// Zero-or-more-of-N choice.
///
/// Space toggles the item under the cursor, `esc` toggles everything at
/// once (all when nothing is selected, otherwise none) and `enter`
/// finishes with the current selection.
#[derive(Debug, Clone)]
pub struct MultiSelect {
    choices: Vec<String>,
    title: String,
    message: String,
    cursor: usize,
    selected: BTreeSet<usize>,
    interrupted: bool,
    confirmed: bool,
}

impl MultiSelect {
    /// Creates a new multi-select prompt with nothing selected.
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
            selected: BTreeSet::new(),
            interrupted: false,
            confirmed: false,
        }
    }

    /// Pre-selects the given indices. Out-of-range indices are ignored.
    #[must_use]
    pub fn with_selected(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        let len = self.choices.len();
        self.selected
            .extend(indices.into_iter().filter(|&idx| idx < len));
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

    /// Selected indices in ascending order.
    #[must_use]
    pub fn selected_indices(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// Selected choices in list order.
    #[must_use]
    pub fn selected_choices(&self) -> Vec<&str> {
        self.selected
            .iter()
            .filter_map(|&idx| self.choices.get(idx).map(String::as_str))
            .collect()
    }

    #[must_use]
    pub fn into_selected_choices(self) -> Vec<String> {
        let selected = self.selected;
        self.choices
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| selected.contains(idx))
            .map(|(_, choice)| choice)
            .collect()
    }

    /// True when the prompt was cancelled.
    #[must_use]
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    /// True when the prompt finished with `enter`.
    #[must_use]
    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.interrupted || self.confirmed
    }

    fn toggle(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    fn toggle_all(&mut self) {
        if self.selected.is_empty() {
            self.selected = (0..self.choices.len()).collect();
        } else {
            self.selected.clear();
        }
    }

    fn summary(&self) -> String {
        let labels = self.selected_choices();
        if labels.is_empty() {
            "none".to_string()
        } else {
            labels.join(", ")
        }
    }
}

impl Model for MultiSelect {
    fn update(&mut self, msg: Msg) -> Option<Command> {
        if self.is_finished() {
            return None;
        }

        let key = msg.key_string()?;
        match key.as_str() {
            "ctrl+c" | "q" => {
                self.interrupted = true;
                return Some(Command::Quit);
            }
            "enter" => {
                self.confirmed = true;
                return Some(Command::Quit);
            }
            "up" | "k" => self.cursor = cursor_up(self.cursor),
            "down" | "j" => self.cursor = cursor_down(self.cursor, self.choices.len()),
            " " => self.toggle(),
            "esc" => self.toggle_all(),
            _ => {}
        }

        None
    }

    fn view(&self) -> String {
        let mut s = header(&self.title, &self.message);

        for (idx, choice) in self.choices.iter().enumerate() {
            s.push_str(&format!(
                "{} {} {choice}\n",
                cursor_marker(idx == self.cursor),
                checkbox(self.selected.contains(&idx)),
            ));
        }

        s.push_str(&format!("\nSelected: {}\n", self.summary()));
        s.push_str(
            "\nPress q or Ctrl+C to quit, Space to select, Esc to select all, Enter to finalize selection\n",
        );
        s
    }
}
