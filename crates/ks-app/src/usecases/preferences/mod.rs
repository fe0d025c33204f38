//! Preference use cases
//!
//! Theme and currency live in the key-value store as plain strings and are
//! handed to screens as an immutable [`Preferences`] snapshot.

mod apply;
mod load;

pub use apply::{ApplyCurrency, ApplyTheme};
pub use load::LoadPreferences;

pub use ks_core::preferences::Preferences;
