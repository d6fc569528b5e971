mod common;
pub mod config;
mod logging;
pub mod tui;

pub use common::{ENV_CONFIG_DIR_OVERRIDE, PROJECT_NAME, PROJECT_VERSION, PROJECT_VERSION_HASH};
pub use config::{Settings, show_configuration};
pub use logging::Logging;
pub use tui::{
    Command, EventLoop, Model, Msg, MultiSelect, Outcome, Program, PromptResult, ScriptedLoop,
    Select, TextInput, multiselect_prompt, run, select_prompt, text_prompt,
};
