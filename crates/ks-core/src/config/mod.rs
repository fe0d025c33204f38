//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML -> DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//!
//! Missing values map to `None`; the shell decides what a missing value means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Minimum splash display time in milliseconds
    pub splash_duration_ms: Option<u64>,

    /// Simulated sign-in round trip in milliseconds
    pub login_latency_ms: Option<u64>,

    /// Directory holding the key-value store file and logs
    pub data_dir: Option<PathBuf>,

    /// Store file name inside `data_dir`
    pub store_file: Option<String>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section_u64 = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
        };
        let section_str = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Ok(Self {
            splash_duration_ms: section_u64("bootstrap", "splash_duration_ms"),
            login_latency_ms: section_u64("auth", "login_latency_ms"),
            data_dir: section_str("storage", "data_dir").map(PathBuf::from),
            store_file: section_str("storage", "store_file"),
        })
    }

    /// Create empty AppConfig (every value missing)
    pub fn empty() -> Self {
        Self {
            splash_duration_ms: None,
            login_latency_ms: None,
            data_dir: None,
            store_file: None,
        }
    }
}
