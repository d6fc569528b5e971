mod loader;
pub use loader::{CONFIG_FILE_NAME, Settings, show_configuration};
