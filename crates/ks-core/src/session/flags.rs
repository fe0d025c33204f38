use serde::{Deserialize, Serialize};

use crate::navigation::Route;

/// Session facts read from the key-value store at startup.
///
/// `Default` is the fail-safe value: onboarding not seen, no token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionFlags {
    pub has_seen_onboarding: bool,
    pub auth_token: Option<String>,
}

impl SessionFlags {
    /// Build flags from the raw stored values.
    ///
    /// Any stored onboarding value counts as seen. An empty token is treated
    /// as no token.
    pub fn from_stored(onboarding_flag: Option<String>, auth_token: Option<String>) -> Self {
        Self {
            has_seen_onboarding: onboarding_flag.is_some(),
            auth_token: auth_token.filter(|token| !token.is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub fn initial_route(&self) -> Route {
        initial_route(self)
    }
}

/// Landing route for a cold start.
///
/// Onboarding takes precedence over auth state: a user who never onboarded
/// must not land in Auth or Main.
pub fn initial_route(flags: &SessionFlags) -> Route {
    if !flags.has_seen_onboarding {
        Route::Onboarding
    } else if flags.auth_token.is_none() {
        Route::auth()
    } else {
        Route::main()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(onboarded: bool, token: bool) -> SessionFlags {
        SessionFlags {
            has_seen_onboarding: onboarded,
            auth_token: token.then(|| "tok".to_string()),
        }
    }

    #[test]
    fn initial_route_table() {
        assert_eq!(initial_route(&flags(false, false)), Route::Onboarding);
        assert_eq!(initial_route(&flags(false, true)), Route::Onboarding);
        assert_eq!(initial_route(&flags(true, false)), Route::auth());
        assert_eq!(initial_route(&flags(true, true)), Route::main());
    }

    #[test]
    fn default_flags_land_on_onboarding() {
        assert_eq!(initial_route(&SessionFlags::default()), Route::Onboarding);
    }

    #[test]
    fn any_stored_onboarding_value_counts_as_seen() {
        let flags = SessionFlags::from_stored(Some("yes".into()), None);
        assert!(flags.has_seen_onboarding);
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let flags = SessionFlags::from_stored(Some("true".into()), Some(String::new()));
        assert!(!flags.is_authenticated());
        assert_eq!(initial_route(&flags), Route::auth());
    }

    #[test]
    fn method_matches_free_function() {
        for (onboarded, token) in [(false, false), (false, true), (true, false), (true, true)] {
            let flags = flags(onboarded, token);
            assert_eq!(flags.initial_route(), initial_route(&flags));
        }
    }
}
