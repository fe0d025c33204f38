use std::fmt;

use serde::{Deserialize, Serialize};

/// Screens of the authentication sub-router.
///
/// 认证子路由的页面。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
    ForgotPassword,
}

/// Tabs of the main sub-router.
///
/// 主页标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MainTab {
    #[default]
    Home,
    Categories,
    Cart,
    Orders,
    Profile,
}

/// A named screen or screen group the router can present.
///
/// Each variant carries a fixed, typed payload instead of an arbitrary
/// parameter object, so a screen can never be entered with a payload of the
/// wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Splash,
    Onboarding,
    Auth { screen: AuthScreen },
    Main { tab: MainTab },
    ProductDetail { product_id: String },
    Checkout,
    Payment {
        order_id: String,
        amount_minor: u64,
        currency: String,
    },
    OrderConfirmation {
        order_id: String,
        transaction_id: String,
    },
    OrderTracking { order_id: String },
    Settings,
}

impl Route {
    /// Auth sub-router focused on the login screen.
    pub fn auth() -> Self {
        Route::Auth {
            screen: AuthScreen::Login,
        }
    }

    /// Main sub-router focused on the home tab.
    pub fn main() -> Self {
        Route::Main { tab: MainTab::Home }
    }

    /// Screen name as registered with the root stack.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Splash => "Splash",
            Route::Onboarding => "Onboarding",
            Route::Auth { .. } => "Auth",
            Route::Main { .. } => "Main",
            Route::ProductDetail { .. } => "ProductDetail",
            Route::Checkout => "Checkout",
            Route::Payment { .. } => "Payment",
            Route::OrderConfirmation { .. } => "OrderConfirmation",
            Route::OrderTracking { .. } => "OrderTracking",
            Route::Settings => "Settings",
        }
    }

    /// Whether this route is one of the four session-level roots.
    pub fn is_session_root(&self) -> bool {
        matches!(
            self,
            Route::Splash | Route::Onboarding | Route::Auth { .. } | Route::Main { .. }
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Auth { screen } => write!(f, "Auth/{screen:?}"),
            Route::Main { tab } => write!(f, "Main/{tab:?}"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_routes_default_to_first_screen() {
        assert_eq!(
            Route::auth(),
            Route::Auth {
                screen: AuthScreen::Login
            }
        );
        assert_eq!(Route::main(), Route::Main { tab: MainTab::Home });
    }

    #[test]
    fn display_includes_nested_screen() {
        assert_eq!(Route::auth().to_string(), "Auth/Login");
        assert_eq!(
            Route::Main {
                tab: MainTab::Orders
            }
            .to_string(),
            "Main/Orders"
        );
        assert_eq!(Route::Splash.to_string(), "Splash");
    }

    #[test]
    fn detail_screens_are_not_session_roots() {
        assert!(Route::Onboarding.is_session_root());
        assert!(!Route::OrderTracking {
            order_id: "o-1".into()
        }
        .is_session_root());
    }

    #[test]
    fn serialized_payload_is_tagged_by_route() {
        let route = Route::ProductDetail {
            product_id: "kimchi-01".into(),
        };
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["route"], "product_detail");
        assert_eq!(json["product_id"], "kimchi-01");
    }

    #[test]
    fn auth_route_keeps_its_screen_field_through_json() {
        let route = Route::Auth {
            screen: AuthScreen::ForgotPassword,
        };
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["route"], "auth");
        assert!(json.get("screen").is_some());

        let back: Route = serde_json::from_value(json).unwrap();
        assert_eq!(back, route);
    }
}
