//! # Application Dependencies
//!
//! This module defines the dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;
use std::time::Duration;

use ks_core::ports::{KeyValueStorePort, NavigatorPort};

use crate::usecases::{
    ApplyCurrency, ApplyTheme, BootstrapConfig, BootstrapSequencer, CompleteOnboarding,
    LoadPreferences, LoginUser, LogoutUser, ResetStorage, ResolveSessionState,
};

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Storage dependencies
    pub store: Arc<dyn KeyValueStorePort>,

    // Navigation dependencies
    pub navigator: Arc<dyn NavigatorPort>,

    // Timing
    pub bootstrap: BootstrapConfig,
    pub login_latency: Duration,
}

/// Use case accessor over [`AppDeps`].
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    pub fn resolve_session(&self) -> ResolveSessionState {
        ResolveSessionState::new(self.deps.store.clone())
    }

    pub fn bootstrap(&self) -> Arc<BootstrapSequencer> {
        Arc::new(BootstrapSequencer::new(
            Arc::new(self.resolve_session()),
            self.deps.navigator.clone(),
            self.deps.bootstrap,
        ))
    }

    pub fn complete_onboarding(&self) -> CompleteOnboarding {
        CompleteOnboarding::new(self.deps.store.clone(), self.deps.navigator.clone())
    }

    pub fn login(&self) -> LoginUser {
        LoginUser::new(
            self.deps.store.clone(),
            self.deps.navigator.clone(),
            self.deps.login_latency,
        )
    }

    pub fn logout(&self) -> LogoutUser {
        LogoutUser::new(self.deps.store.clone(), self.deps.navigator.clone())
    }

    pub fn reset_storage(&self) -> ResetStorage {
        ResetStorage::new(self.deps.store.clone())
    }

    pub fn load_preferences(&self) -> LoadPreferences {
        LoadPreferences::new(self.deps.store.clone())
    }

    pub fn apply_theme(&self) -> ApplyTheme {
        ApplyTheme::new(self.deps.store.clone())
    }

    pub fn apply_currency(&self) -> ApplyCurrency {
        ApplyCurrency::new(self.deps.store.clone())
    }
}
