use std::sync::Arc;

use tracing::info;

use ks_core::ports::{KeyValueStorePort, StorageError};

/// Debug utility: wipe every persisted key.
///
/// The next cold start behaves like a fresh install.
pub struct ResetStorage {
    store: Arc<dyn KeyValueStorePort>,
}

impl ResetStorage {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<(), StorageError> {
        self.store.clear().await?;
        info!("storage cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::ResolveSessionState;
    use ks_core::navigation::Route;
    use ks_core::session::keys;
    use ks_infra::storage::InMemoryKeyValueStore;

    #[tokio::test]
    async fn reset_makes_next_boot_land_on_onboarding() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set(keys::HAS_SEEN_ONBOARDING, "true").await.unwrap();
        store.set(keys::AUTH_TOKEN, "tok").await.unwrap();
        let resolver = ResolveSessionState::new(store.clone());
        assert_eq!(resolver.landing_route().await, Route::main());

        ResetStorage::new(store).execute().await.unwrap();

        assert_eq!(resolver.landing_route().await, Route::Onboarding);
    }
}
