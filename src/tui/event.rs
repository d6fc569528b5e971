//! Input events delivered to prompt models and the commands they hand back.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A scheduled follow-up action.
///
/// `owner` identifies the component that armed it and `seq` lets that
/// component recognise (and ignore) a tick that has since been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub owner: u64,
    pub seq: u64,
    pub after: Duration,
}

/// A discrete notification delivered to a model by the event loop.
#[derive(Debug)]
pub enum Msg {
    /// A key press
    Key(KeyEvent),
    /// Bracketed paste contents
    Paste(String),
    /// The terminal was resized
    Resize { width: u16, height: u16 },
    /// A previously scheduled tick has elapsed
    Tick(Tick),
    /// A non-fatal error reported during an update cycle
    Error(anyhow::Error),
}

impl Msg {
    /// Converts a raw terminal event, dropping the kinds prompts never consume.
    #[must_use]
    pub fn from_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            Event::Paste(text) => Some(Self::Paste(text)),
            Event::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }

    /// A key press without modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// A printable character key press.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// A control-modified character key press, e.g. `ctrl+c`.
    #[must_use]
    pub fn ctrl(c: char) -> Self {
        Self::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// The stringified key identity, if this is a key press.
    #[must_use]
    pub fn key_string(&self) -> Option<String> {
        match self {
            Self::Key(key) => Some(key_string(key)),
            _ => None,
        }
    }
}

/// What a model asks of the loop after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop dispatching events and return control to the caller
    Quit,
    /// Deliver `Msg::Tick` once `tick.after` has elapsed, replacing any pending tick
    Schedule(Tick),
}

/// Renders a key press the way prompts match on it: `"ctrl+c"`, `"up"`,
/// `"enter"`, `" "`, `"q"` and so on.
#[must_use]
pub fn key_string(key: &KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => " ".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => return "shift+tab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => String::new(),
    };

    let mut prefix = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("alt+");
    }
    // Shift is already folded into the character for printable keys
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        prefix.push_str("shift+");
    }

    format!("{prefix}{base}")
}
