use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use ks_core::navigation::{Route, RouteTransition};
use ks_core::ports::{KeyValueStorePort, NavigationError, NavigatorPort};
use ks_core::session::keys;

/// Use case for finishing (or skipping) the onboarding slides.
///
/// The flag write is best-effort: if it fails the user still moves on to
/// sign-in, and simply sees onboarding again on the next cold start.
pub struct CompleteOnboarding {
    store: Arc<dyn KeyValueStorePort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl CompleteOnboarding {
    pub fn new(store: Arc<dyn KeyValueStorePort>, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { store, navigator }
    }

    pub async fn execute(&self) -> Result<RouteTransition, NavigationError> {
        async move {
            if let Err(err) = self
                .store
                .set(keys::HAS_SEEN_ONBOARDING, keys::FLAG_TRUE)
                .await
            {
                warn!(error = %err, "failed to persist onboarding flag");
            }

            let transition = RouteTransition::replace(Route::auth());
            self.navigator.dispatch(transition.clone()).await?;
            info!("onboarding completed");
            Ok(transition)
        }
        .instrument(info_span!("usecase.onboarding.complete"))
        .await
    }
}
