use std::sync::Arc;
use std::time::Duration;

use tracing::{info, info_span, Instrument};

use ks_core::auth::{CredentialErrors, Credentials, MOCK_TOKEN_PREFIX};
use ks_core::navigation::{Route, RouteTransition};
use ks_core::ports::{KeyValueStorePort, NavigationError, NavigatorPort, StorageError};
use ks_core::session::keys;

pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    InvalidCredentials(#[from] CredentialErrors),
    #[error("persist session failed: {0}")]
    Storage(#[from] StorageError),
    #[error("navigate after login failed: {0}")]
    Navigation(#[from] NavigationError),
}

/// Sign the user in with a locally simulated backend.
///
/// Validation failures return before any write. On success the session
/// token and email are stored and the router replaces the auth stack with
/// the main tabs.
pub struct LoginUser {
    store: Arc<dyn KeyValueStorePort>,
    navigator: Arc<dyn NavigatorPort>,
    latency: Duration,
}

impl LoginUser {
    pub fn new(
        store: Arc<dyn KeyValueStorePort>,
        navigator: Arc<dyn NavigatorPort>,
        latency: Duration,
    ) -> Self {
        Self {
            store,
            navigator,
            latency,
        }
    }

    pub async fn execute(&self, credentials: Credentials) -> Result<RouteTransition, LoginError> {
        let span = info_span!("usecase.login.execute", email = %credentials.email);
        async move {
            credentials.validate()?;

            tokio::time::sleep(self.latency).await;

            let token = format!("{MOCK_TOKEN_PREFIX}{}", uuid::Uuid::new_v4());
            self.store.set(keys::AUTH_TOKEN, &token).await?;
            self.store
                .set(keys::USER_EMAIL, credentials.email.trim())
                .await?;

            let transition = RouteTransition::replace(Route::main());
            self.navigator.dispatch(transition.clone()).await?;
            info!("user signed in");
            Ok(transition)
        }
        .instrument(span)
        .await
    }
}
