mod file_store;
mod memory;

pub use file_store::{FileKeyValueStore, DEFAULT_STORE_FILE};
pub use memory::InMemoryKeyValueStore;

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "korean-shop";

/// Get the Korean Shop application data root directory.
///
/// # Platform-specific Paths
/// - macOS: ~/Library/Application Support/korean-shop
/// - Windows: %APPDATA%\korean-shop
/// - Linux: $XDG_DATA_HOME/korean-shop or ~/.local/share/korean-shop
///
/// This function does not create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = match std::env::var_os("XDG_DATA_HOME") {
        Some(xdg_data_home) if cfg!(target_os = "linux") => PathBuf::from(xdg_data_home),
        _ => dirs::data_dir().context("Failed to get platform-specific data directory")?,
    };

    Ok(base_dir.join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_ends_with_app_name() {
        let dir = app_data_dir().unwrap();
        assert!(dir.ends_with(APP_DIR_NAME));
    }
}
