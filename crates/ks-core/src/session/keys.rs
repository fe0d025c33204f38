//! Persisted key names.
//!
//! These names are shared with existing installs and must not change.

/// Onboarding flag. Written as [`FLAG_TRUE`]; absence means not seen.
pub const HAS_SEEN_ONBOARDING: &str = "hasSeenOnboarding";

/// Opaque session token.
pub const AUTH_TOKEN: &str = "authToken";

/// Token key written by older builds, read only when [`AUTH_TOKEN`] is absent.
pub const LEGACY_AUTH_TOKEN: &str = "userToken";

/// Display-only email of the signed-in user.
pub const USER_EMAIL: &str = "userEmail";

pub const THEME: &str = "theme";

pub const CURRENCY: &str = "currency";

/// Literal stored for boolean flags. `"false"` is never written.
pub const FLAG_TRUE: &str = "true";
