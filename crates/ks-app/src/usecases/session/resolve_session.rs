use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use ks_core::navigation::Route;
use ks_core::ports::{KeyValueStorePort, StorageError};
use ks_core::session::{initial_route, keys, SessionFlags};

use super::SessionResolver;

/// Use case for reading the persisted session flags.
///
/// The two reads run concurrently. A failed read substitutes the fail-safe
/// default for that field only, so startup never hangs or crashes on a
/// storage fault and leans toward showing onboarding/auth.
pub struct ResolveSessionState {
    store: Arc<dyn KeyValueStorePort>,
}

impl ResolveSessionState {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> SessionFlags {
        let (onboarding, token) = tokio::join!(self.read_onboarding_flag(), self.read_token());
        let flags = SessionFlags::from_stored(onboarding, token);
        debug!(
            has_seen_onboarding = flags.has_seen_onboarding,
            authenticated = flags.is_authenticated(),
            "session flags resolved"
        );
        flags
    }

    /// Landing route for the current stored state.
    pub async fn landing_route(&self) -> Route {
        initial_route(&self.execute().await)
    }

    async fn read_onboarding_flag(&self) -> Option<String> {
        fail_safe(keys::HAS_SEEN_ONBOARDING, self.store.get(keys::HAS_SEEN_ONBOARDING).await)
    }

    /// A failed read of the current key is handled like its absence, so the
    /// legacy key is consulted either way.
    async fn read_token(&self) -> Option<String> {
        if let Some(token) = fail_safe(keys::AUTH_TOKEN, self.store.get(keys::AUTH_TOKEN).await) {
            return Some(token);
        }
        fail_safe(
            keys::LEGACY_AUTH_TOKEN,
            self.store.get(keys::LEGACY_AUTH_TOKEN).await,
        )
    }
}

fn fail_safe(key: &str, read: Result<Option<String>, StorageError>) -> Option<String> {
    read.unwrap_or_else(|err| {
        warn!(key, error = %err, "store read failed, treating key as absent");
        None
    })
}

#[async_trait]
impl SessionResolver for ResolveSessionState {
    async fn resolve(&self) -> anyhow::Result<SessionFlags> {
        Ok(self.execute().await)
    }
}
