use std::sync::Arc;

use tracing::debug;

use ks_core::ports::{KeyValueStorePort, StorageError};
use ks_core::preferences::{Currency, Preferences, ThemePreference};
use ks_core::session::keys;

pub struct ApplyTheme {
    store: Arc<dyn KeyValueStorePort>,
}

impl ApplyTheme {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Persist `theme` and return the updated snapshot.
    pub async fn execute(
        &self,
        current: Preferences,
        theme: ThemePreference,
    ) -> Result<Preferences, StorageError> {
        if current.theme == theme {
            return Ok(current);
        }

        self.store.set(keys::THEME, theme.as_str()).await?;
        debug!(theme = theme.as_str(), "theme applied");
        Ok(current.with_theme(theme))
    }
}

pub struct ApplyCurrency {
    store: Arc<dyn KeyValueStorePort>,
}

impl ApplyCurrency {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Persist `currency` and return the updated snapshot.
    pub async fn execute(
        &self,
        current: Preferences,
        currency: Currency,
    ) -> Result<Preferences, StorageError> {
        if current.currency == currency {
            return Ok(current);
        }

        self.store.set(keys::CURRENCY, currency.as_str()).await?;
        debug!(%currency, "currency applied");
        Ok(current.with_currency(currency))
    }
}
