use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;

use termprompt::{
    Logging, PROJECT_NAME, PROJECT_VERSION, Settings, multiselect_prompt, select_prompt,
    show_configuration, text_prompt,
};

/// Exit status for a prompt the user cancelled (128 + SIGINT)
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
pub struct UserArgs {
    #[command(subcommand)]
    command: Command,

    /// Render in the alternate screen buffer
    #[arg(short, long)]
    full_screen: bool,

    /// Verbose (debug level) logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Pick one of the given choices
    Select {
        /// Title line
        #[arg(long, default_value = "")]
        title: String,

        /// Message line below the title
        #[arg(long, default_value = "")]
        message: String,

        /// Choices, in display order
        #[arg(required = true)]
        choices: Vec<String>,
    },

    /// Pick any number of the given choices
    #[command(visible_alias = "multiselect")]
    Multi {
        /// Title line
        #[arg(long, default_value = "")]
        title: String,

        /// Message line below the title
        #[arg(long, default_value = "")]
        message: String,

        /// Choices, in display order
        #[arg(required = true)]
        choices: Vec<String>,
    },

    /// Read a line of text
    Input {
        /// Prompt text
        #[arg(long, default_value = "")]
        prompt: String,

        /// Placeholder shown while empty
        #[arg(long, default_value = "")]
        placeholder: String,

        /// Maximum number of characters (0 = unlimited)
        #[arg(long, default_value_t = 0)]
        char_limit: usize,

        /// Visible width in characters (0 = unlimited)
        #[arg(long, default_value_t = 0)]
        width: usize,
    },

    /// Show Config
    #[command(visible_alias = "show-config")]
    ShowConfiguration,
}

fn init_logging(debug: bool) -> Result<()> {
    let file_name = format!("{PROJECT_NAME}.log");
    Logging::new()
        .with_file(file_name)
        .with_debug_mode(debug)
        .start()
}

/// Prints each value on its own line to stdout, or a notice to stderr on cancel.
fn finish(values: Option<Vec<String>>) -> ExitCode {
    match values {
        Some(values) => {
            for value in values {
                println!("{value}");
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("{} {}", "✗".red(), "cancelled".red());
            ExitCode::from(EXIT_CANCELLED)
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = UserArgs::parse();

    let mut settings = Settings::load().context("Failed to load settings")?;
    settings.full_screen |= args.full_screen;
    settings.debug |= args.verbose;

    init_logging(settings.debug)?;
    info!("{PROJECT_NAME} {PROJECT_VERSION} starting");

    let code = match args.command {
        Command::Select {
            title,
            message,
            choices,
        } => {
            let choice = select_prompt(&title, &message, choices, &settings)
                .context("Failed to read selection")?;
            finish(choice.map(|c| vec![c]))
        }
        Command::Multi {
            title,
            message,
            choices,
        } => {
            let selected = multiselect_prompt(&title, &message, choices, &settings)
                .context("Failed to read selection")?;
            finish(selected)
        }
        Command::Input {
            prompt,
            placeholder,
            char_limit,
            width,
        } => {
            let text = text_prompt(&prompt, &placeholder, char_limit, width, &settings)
                .context("Failed to read input")?;
            finish(text.map(|t| vec![t]))
        }
        Command::ShowConfiguration => {
            show_configuration()?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
