use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use bon::Builder;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::common::{PROJECT_NAME, PROJECT_VERSION, project_config_dir};
use crate::tui::DEFAULT_BLINK_INTERVAL_MS;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// User settings for prompt display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Settings {
    /// Render prompts in the alternate screen buffer
    #[serde(default)]
    #[builder(default)]
    pub full_screen: bool,
    /// Cursor blink interval for text prompts
    #[serde(default = "default_blink_interval_ms")]
    #[builder(default = DEFAULT_BLINK_INTERVAL_MS)]
    pub blink_interval_ms: u64,
    /// Log at debug level
    #[serde(default)]
    #[builder(default)]
    pub debug: bool,
}

fn default_blink_interval_ms() -> u64 {
    DEFAULT_BLINK_INTERVAL_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            full_screen: false,
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
            debug: false,
        }
    }
}

impl Settings {
    pub(crate) fn load_existing(config_file: &Path) -> Result<Self> {
        let config_string = fs::read_to_string(config_file)
            .with_context(|| format!("Unable to read {}", config_file.display()))?;

        let settings: Settings =
            toml::from_str(&config_string).context("Unable to deserialize configuration data")?;

        Ok(settings)
    }

    /// Loads `config.toml` from `config_file`, or defaults when it does not exist.
    pub fn load_from(config_file: &Path) -> Result<Self> {
        if config_file.exists() {
            debug!("loading settings from {}", config_file.display());
            Settings::load_existing(config_file)
        } else {
            //
            // doesn't exist yet
            //
            Ok(Settings::default())
        }
    }

    /// Loads settings from the project config directory.
    pub fn load() -> Result<Self> {
        let config_dir = project_config_dir()?;
        Settings::load_from(&config_dir.join(CONFIG_FILE_NAME))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Unable to serialize configuration data")
    }

    pub fn save_to(&self, config_file: &Path) -> Result<()> {
        let config_string = self.to_toml()?;

        let mut fd = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(config_file)
            .with_context(|| format!("Unable to write {}", config_file.display()))?;

        fd.write_all(config_string.as_bytes()).with_context(|| {
            format!("Failed to write configuration to {}", config_file.display())
        })?;

        info!("settings saved to {}", config_file.display());
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = project_config_dir()?;
        self.save_to(&config_dir.join(CONFIG_FILE_NAME))
    }
}

////////////////////////////////////////////////////////////////////////////////
// PUBLIC
////////////////////////////////////////////////////////////////////////////////

pub fn show_configuration() -> Result<()> {
    let config_file = project_config_dir()?.join(CONFIG_FILE_NAME);
    let settings = Settings::load_from(&config_file)?;

    println!("{PROJECT_NAME} {PROJECT_VERSION}");
    println!("# {}", config_file.display());
    print!("{}", settings.to_toml()?);

    Ok(())
}
