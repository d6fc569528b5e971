//! High-level prompt functions for common use cases.
//!
//! Each helper builds a model, runs it on the real terminal and converts
//! the final state into a [`PromptResult`].

use std::time::Duration;

use log::info;

use super::{
    components::{MultiSelect, PromptResult, Select, TextInput},
    program::Program,
};
use crate::config::Settings;

/// Creates a single-selection prompt from a list of string options.
///
/// # Returns
///
/// - `Ok(Some(choice))` - The selected option
/// - `Ok(None)` - User cancelled
/// - `Err(_)` - Terminal error
///
/// # Example
///
/// ```ignore
/// let color = select_prompt(
///     "Colors",
///     "Pick a color:",
///     ["red", "green", "blue"],
///     &Settings::default(),
/// )?;
/// ```
pub fn select_prompt<I, S>(
    title: &str,
    message: &str,
    choices: I,
    settings: &Settings,
) -> PromptResult<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let model = Select::new(choices, title, message);
    let (model, result) = Program::new(model)
        .with_full_screen(settings.full_screen)
        .run();
    result?;

    if model.interrupted() {
        info!("select prompt cancelled");
    }
    Ok(model.into_selected())
}

/// Creates a multi-selection prompt from a list of string options.
///
/// # Returns
///
/// - `Ok(Some(choices))` - The selected options in list order (possibly empty)
/// - `Ok(None)` - User cancelled
/// - `Err(_)` - Terminal error
pub fn multiselect_prompt<I, S>(
    title: &str,
    message: &str,
    choices: I,
    settings: &Settings,
) -> PromptResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let model = MultiSelect::new(choices, title, message);
    let (model, result) = Program::new(model)
        .with_full_screen(settings.full_screen)
        .run();
    result?;

    if model.interrupted() {
        info!("multi-select prompt cancelled");
        return Ok(None);
    }
    Ok(Some(model.into_selected_choices()))
}

/// Creates a free-text prompt.
///
/// `char_limit` and `width` of zero mean unlimited.
///
/// # Returns
///
/// - `Ok(Some(text))` - User accepted with Enter
/// - `Ok(None)` - User cancelled with Esc or Ctrl+C
/// - `Err(_)` - Terminal error
pub fn text_prompt(
    prompt: &str,
    placeholder: &str,
    char_limit: usize,
    width: usize,
    settings: &Settings,
) -> PromptResult<String> {
    let model = TextInput::new(prompt, placeholder, char_limit, width)
        .with_blink_interval(Duration::from_millis(settings.blink_interval_ms));
    let (model, result) = Program::new(model)
        .with_full_screen(settings.full_screen)
        .run();
    result?;

    info!("text prompt {}", model.outcome());
    Ok(model.into_value())
}
