use std::str::FromStr;
use std::sync::Arc;

use tracing::warn;

use ks_core::ports::KeyValueStorePort;
use ks_core::preferences::Preferences;
use ks_core::session::keys;

/// Read the stored preferences; anything missing, unknown or unreadable
/// falls back to its default.
pub struct LoadPreferences {
    store: Arc<dyn KeyValueStorePort>,
}

impl LoadPreferences {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Preferences {
        let (theme, currency) = tokio::join!(
            self.read_or_default(keys::THEME),
            self.read_or_default(keys::CURRENCY)
        );
        Preferences { theme, currency }
    }

    async fn read_or_default<T>(&self, key: &str) -> T
    where
        T: FromStr + Default,
        T::Err: std::fmt::Display,
    {
        match self.store.get(key).await {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err: T::Err| {
                warn!(key, error = %err, "ignoring unknown stored preference");
                T::default()
            }),
            Ok(None) => T::default(),
            Err(err) => {
                warn!(key, error = %err, "preference read failed, using default");
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ks_core::preferences::{Currency, ThemePreference};
    use ks_infra::storage::InMemoryKeyValueStore;

    #[tokio::test]
    async fn missing_values_load_defaults() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let prefs = LoadPreferences::new(store).execute().await;
        assert_eq!(prefs, Preferences::default());
    }

    #[tokio::test]
    async fn stored_values_are_parsed() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set(keys::THEME, "dark").await.unwrap();
        store.set(keys::CURRENCY, "EUR").await.unwrap();

        let prefs = LoadPreferences::new(store).execute().await;

        assert_eq!(prefs.theme, ThemePreference::Dark);
        assert_eq!(prefs.currency, Currency::Eur);
    }

    #[tokio::test]
    async fn unknown_values_fall_back() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set(keys::THEME, "sepia").await.unwrap();

        let prefs = LoadPreferences::new(store).execute().await;

        assert_eq!(prefs.theme, ThemePreference::System);
    }
}
