//! Interactive terminal prompts.
//!
//! Each prompt is a [`Model`]: a state machine that consumes [`Msg`]s and
//! renders itself as text. A [`Program`] feeds it from an [`EventLoop`]
//! until the model asks to quit:
//! - `Select` - Single selection from a list
//! - `MultiSelect` - Multiple selection with toggle
//! - `TextInput` - Free text entry

mod app;
pub mod components;
mod event;
mod model;
mod program;
mod prompts;
mod scripted;

pub use app::{TerminalApp, TuiTerminal};
pub use components::{
    DEFAULT_BLINK_INTERVAL, DEFAULT_BLINK_INTERVAL_MS, MultiSelect, Outcome, PromptResult, Select,
    TextField, TextInput,
};
pub use event::{Command, Msg, Tick, key_string};
pub use model::Model;
pub use program::{EventLoop, Program, run};
pub use prompts::{multiselect_prompt, select_prompt, text_prompt};
pub use scripted::ScriptedLoop;
