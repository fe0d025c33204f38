//! Business logic use cases
//!
//! [App start]
//!        ↓
//! BootstrapSequencer ── ResolveSessionState ── KeyValueStorePort
//!        ↓
//! NavigatorPort (reset → Onboarding | Auth | Main)
//!        ↓
//! CompleteOnboarding / LoginUser / LogoutUser → NavigatorPort

pub mod auth;
pub mod bootstrap;
pub mod onboarding;
pub mod preferences;
pub mod reset_storage;
pub mod session;

pub use auth::{LoginError, LoginUser, LogoutUser, DEFAULT_LOGIN_LATENCY};
pub use bootstrap::{BootstrapConfig, BootstrapHandle, BootstrapOutcome, BootstrapSequencer};
pub use onboarding::CompleteOnboarding;
pub use preferences::{ApplyCurrency, ApplyTheme, LoadPreferences};
pub use reset_storage::ResetStorage;
pub use session::{ResolveSessionState, SessionResolver};
