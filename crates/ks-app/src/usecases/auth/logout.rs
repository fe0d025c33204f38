use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use ks_core::navigation::{Route, RouteTransition};
use ks_core::ports::{KeyValueStorePort, NavigationError, NavigatorPort};
use ks_core::session::keys;

/// Sign the user out and reset navigation to the auth stack.
///
/// A failed key removal is logged; the reset still happens so the user is
/// never left on a signed-in screen.
pub struct LogoutUser {
    store: Arc<dyn KeyValueStorePort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl LogoutUser {
    pub fn new(store: Arc<dyn KeyValueStorePort>, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { store, navigator }
    }

    pub async fn execute(&self) -> Result<RouteTransition, NavigationError> {
        async move {
            for key in [keys::AUTH_TOKEN, keys::LEGACY_AUTH_TOKEN, keys::USER_EMAIL] {
                if let Err(err) = self.store.remove(key).await {
                    warn!(key, error = %err, "failed to remove session key");
                }
            }

            let transition = RouteTransition::reset(Route::auth());
            self.navigator.dispatch(transition.clone()).await?;
            info!("user signed out");
            Ok(transition)
        }
        .instrument(info_span!("usecase.logout.execute"))
        .await
    }
}
