//! Single-line editing widget built on `tui-input`.
//!
//! Adds what prompts need on top of [`tui_input::Input`]: placeholder
//! text, a character limit, a fixed display width with horizontal
//! scrolling, and a blinking cursor driven by scheduled ticks.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use crossterm::event::Event;
use tui_input::{Input, InputRequest, backend::crossterm::to_input_request};

use super::render::calculate_scroll;
use crate::tui::{Command, Msg, Tick};

pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 530;

/// Default cursor blink interval.
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(DEFAULT_BLINK_INTERVAL_MS);

const PROMPT: &str = "> ";
const CURSOR: char = '█';

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A focusable single-line text field.
#[derive(Debug, Clone)]
pub struct TextField {
    input: Input,
    placeholder: String,
    char_limit: usize,
    width: usize,
    focused: bool,
    cursor_visible: bool,
    id: u64,
    blink_seq: u64,
    blink_interval: Duration,
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl TextField {
    /// Creates an empty, unfocused field with no limit and no fixed width.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: Input::default(),
            placeholder: String::new(),
            char_limit: 0,
            width: 0,
            focused: false,
            cursor_visible: false,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            blink_seq: 0,
            blink_interval: DEFAULT_BLINK_INTERVAL,
        }
    }

    /// Text shown while the buffer is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Maximum number of characters. Zero means unlimited.
    #[must_use]
    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    /// Number of visible columns. Zero means the whole buffer is shown.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }

    /// Starts with `value` in the buffer (truncated to the char limit).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        let value = if self.char_limit > 0 {
            value.chars().take(self.char_limit).collect()
        } else {
            value
        };
        self.input = Input::new(value);
        self
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.cursor_visible = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.cursor_visible = false;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn is_cursor_visible(&self) -> bool {
        self.focused && self.cursor_visible
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Cursor position in characters.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    /// Arms a fresh blink cycle, invalidating any tick already in flight.
    pub fn blink(&mut self) -> Command {
        self.blink_seq = self.blink_seq.wrapping_add(1);
        Command::Schedule(self.tick())
    }

    fn tick(&self) -> Tick {
        Tick {
            owner: self.id,
            seq: self.blink_seq,
            after: self.blink_interval,
        }
    }

    /// Handles one message. Unfocused fields ignore everything.
    pub fn update(&mut self, msg: Msg) -> Option<Command> {
        if !self.focused {
            return None;
        }

        match msg {
            Msg::Tick(tick) => {
                if tick.owner != self.id || tick.seq != self.blink_seq {
                    return None;
                }
                self.cursor_visible = !self.cursor_visible;
                Some(Command::Schedule(self.tick()))
            }
            Msg::Key(key) => {
                let request = to_input_request(&Event::Key(key))?;
                self.apply(request);
                self.cursor_visible = true;
                Some(self.blink())
            }
            Msg::Paste(text) => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    self.apply(InputRequest::InsertChar(c));
                }
                self.cursor_visible = true;
                Some(self.blink())
            }
            Msg::Resize { .. } | Msg::Error(_) => None,
        }
    }

    fn apply(&mut self, request: InputRequest) {
        if let InputRequest::InsertChar(_) = request
            && self.char_limit > 0
            && self.input.value().chars().count() >= self.char_limit
        {
            return;
        }
        self.input.handle(request);
    }

    /// The visible line: prompt, then the buffer (or placeholder) window.
    #[must_use]
    pub fn view(&self) -> String {
        let show_cursor = self.is_cursor_visible();

        let line = if self.input.value().is_empty() && !self.placeholder.is_empty() {
            let placeholder: Vec<char> = self.placeholder.chars().collect();
            visible_window(&placeholder, 0, self.width, show_cursor)
        } else {
            let value: Vec<char> = self.input.value().chars().collect();
            visible_window(&value, self.input.cursor(), self.width, show_cursor)
        };

        format!("{PROMPT}{line}")
    }
}

fn visible_window(chars: &[char], cursor: usize, width: usize, show_cursor: bool) -> String {
    let scroll = calculate_scroll(cursor, width);
    let visible = if width == 0 { usize::MAX } else { width };
    // Room for the cursor past the last character
    let tail = (cursor >= chars.len()).then_some(' ');

    chars
        .iter()
        .copied()
        .chain(tail)
        .enumerate()
        .skip(scroll)
        .take(visible)
        .map(|(idx, c)| if show_cursor && idx == cursor { CURSOR } else { c })
        .collect()
}
