//! Prompt models and the widgets they are built from.

mod multiselect;
mod render;
mod select;
mod text_field;
mod text_input;

pub use multiselect::MultiSelect;
pub use select::Select;
pub use text_field::{DEFAULT_BLINK_INTERVAL, DEFAULT_BLINK_INTERVAL_MS, TextField};
pub use text_input::{Outcome, TextInput};

use anyhow::Result;

/// Result type for prompt operations.
///
/// - `Ok(Some(value))` - User submitted a value
/// - `Ok(None)` - User cancelled (Escape, `q` or Ctrl+C)
/// - `Err(_)` - An error occurred
pub type PromptResult<T> = Result<Option<T>>;

#[cfg(test)]
mod text_field_tests;
