use std::{
    env, fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use log::debug;

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("GIT_VERSION");
pub const PROJECT_VERSION_HASH: &str = env!("GIT_HASH");

/// Environment variable to override the config directory.
///
/// Example usage in tests:
///   export TERMPROMPT_CONFIG_DIR="/tmp/test-config/termprompt"
pub const ENV_CONFIG_DIR_OVERRIDE: &str = "TERMPROMPT_CONFIG_DIR";

/// Returns the project data directory (where log files go), creating it if needed.
///
/// Returns: Path to `~/.local/share/termprompt` (or platform equivalent)
pub fn project_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("Unable to determine data directory. Ensure XDG_DATA_HOME or HOME environment variable is set"))?;

    let project_data_dir = data_dir.join(PROJECT_NAME);
    create_directory(&project_data_dir)?;

    Ok(project_data_dir)
}

/// Returns the project config directory, creating it if needed.
///
/// If `TERMPROMPT_CONFIG_DIR` is set, uses that path directly (validated).
/// Otherwise falls back to `dirs::config_dir()/termprompt`.
pub fn project_config_dir() -> Result<PathBuf> {
    let override_dir = env::var(ENV_CONFIG_DIR_OVERRIDE).ok();
    let project_config_dir = resolve_config_dir(override_dir.as_deref())?;

    create_directory(&project_config_dir)?;

    Ok(project_config_dir)
}

pub(crate) fn resolve_config_dir(override_dir: Option<&str>) -> Result<PathBuf> {
    if let Some(override_dir) = override_dir {
        let path = PathBuf::from(override_dir);

        if !path.is_absolute() {
            bail!("{ENV_CONFIG_DIR_OVERRIDE} must be an absolute path: {override_dir}");
        }
        // Reject path traversal
        if path.components().any(|c| c == Component::ParentDir) {
            bail!("{ENV_CONFIG_DIR_OVERRIDE} contains parent directory references: {override_dir}");
        }

        debug!("Using config directory override from {ENV_CONFIG_DIR_OVERRIDE}: {}", path.display());
        return Ok(path);
    }

    let config_dir = dirs::config_dir().ok_or_else(|| anyhow!("Unable to determine config directory. Ensure XDG_CONFIG_HOME or HOME environment variable is set"))?;
    Ok(config_dir.join(PROJECT_NAME))
}

fn create_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))
}
