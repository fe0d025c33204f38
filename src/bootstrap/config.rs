//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto the [`AppConfig`] DTO.
//! No validation and no defaults here; wiring decides what a missing value means.

use anyhow::Context;
use std::path::Path;

use ks_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [bootstrap]
            splash_duration_ms = 250

            [auth]
            login_latency_ms = 0

            [storage]
            data_dir = "/var/lib/korean-shop"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.splash_duration_ms, Some(250));
        assert_eq!(config.login_latency_ms, Some(0));
        assert_eq!(
            config.data_dir,
            Some(PathBuf::from("/var/lib/korean-shop"))
        );
        assert_eq!(config.store_file, None);
    }

    #[test]
    fn test_load_config_missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/korean-shop.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/korean-shop.toml"));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[bootstrap\nsplash").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
