//! # Dependency Injection
//!
//! Builds the concrete store and router and groups them into [`AppDeps`].
//! This is the only module that knows about ks-infra, ks-app and ks-core
//! at once. It assembles; it does not decide.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ks_app::usecases::{BootstrapConfig, DEFAULT_LOGIN_LATENCY};
use ks_app::AppDeps;
use ks_core::config::AppConfig;
use ks_infra::storage::DEFAULT_STORE_FILE;
use ks_infra::{app_data_dir, FileKeyValueStore, StackNavigator};

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configured data directory, or the platform default.
pub fn resolve_data_dir(config: &AppConfig) -> WiringResult<PathBuf> {
    match &config.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => app_data_dir().map_err(|e| WiringError::DataDir(e.to_string())),
    }
}

pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let data_dir = resolve_data_dir(config)?;
    let store_file = config
        .store_file
        .clone()
        .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string());

    let bootstrap = match config.splash_duration_ms {
        Some(ms) => BootstrapConfig {
            splash_duration: Duration::from_millis(ms),
        },
        None => BootstrapConfig::default(),
    };
    let login_latency = config
        .login_latency_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_LOGIN_LATENCY);

    tracing::debug!(data_dir = %data_dir.display(), %store_file, "wiring dependencies");

    Ok(AppDeps {
        store: Arc::new(FileKeyValueStore::with_base_dir(data_dir, store_file)),
        navigator: Arc::new(StackNavigator::new()),
        bootstrap,
        login_latency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ks_core::navigation::Route;
    use tempfile::TempDir;

    #[test]
    fn test_wiring_error_display() {
        let err = WiringError::DataDir("no home".to_string());
        assert_eq!(err.to_string(), "Data directory unavailable: no home");
    }

    #[test]
    fn test_resolve_data_dir_prefers_config() {
        let mut config = AppConfig::empty();
        config.data_dir = Some(PathBuf::from("/srv/shop"));

        assert_eq!(resolve_data_dir(&config).unwrap(), PathBuf::from("/srv/shop"));
    }

    #[tokio::test]
    async fn test_wire_dependencies_applies_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = AppConfig::empty();
        config.data_dir = Some(temp_dir.path().to_path_buf());

        let deps = wire_dependencies(&config).unwrap();

        assert_eq!(deps.bootstrap, BootstrapConfig::default());
        assert_eq!(deps.login_latency, DEFAULT_LOGIN_LATENCY);
        assert_eq!(deps.navigator.current_route().await, Some(Route::Splash));
    }

    #[test]
    fn test_wire_dependencies_uses_configured_timings() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = AppConfig::empty();
        config.data_dir = Some(temp_dir.path().to_path_buf());
        config.splash_duration_ms = Some(10);
        config.login_latency_ms = Some(0);

        let deps = wire_dependencies(&config).unwrap();

        assert_eq!(deps.bootstrap.splash_duration, Duration::from_millis(10));
        assert_eq!(deps.login_latency, Duration::ZERO);
    }
}
