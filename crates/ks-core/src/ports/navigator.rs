use async_trait::async_trait;
use thiserror::Error;

use crate::navigation::{Route, RouteTransition};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A transition arrived after the one-shot guard fired. Dropped, logged only.
    #[error("navigation conflict: {0}")]
    Conflict(String),

    #[error("nothing to go back to")]
    NothingToGoBackTo,
}

/// Router that presents screens for typed routes.
///
/// The bootstrap core only issues resets; the remaining helpers are used by
/// screen handlers and must honor the same [`Route`] enum.
#[async_trait]
pub trait NavigatorPort: Send + Sync {
    async fn current_route(&self) -> Option<Route>;

    async fn dispatch(&self, transition: RouteTransition) -> Result<(), NavigationError>;

    async fn navigate(&self, route: Route) -> Result<(), NavigationError> {
        self.dispatch(RouteTransition::push(route)).await
    }

    async fn replace(&self, route: Route) -> Result<(), NavigationError> {
        self.dispatch(RouteTransition::replace(route)).await
    }

    async fn reset(&self, route: Route) -> Result<(), NavigationError> {
        self.dispatch(RouteTransition::reset(route)).await
    }

    async fn go_back(&self) -> Result<(), NavigationError> {
        self.dispatch(RouteTransition::go_back()).await
    }
}

#[cfg(test)]
mockall::mock! {
    pub Navigator {}

    #[async_trait]
    impl NavigatorPort for Navigator {
        async fn current_route(&self) -> Option<Route>;
        async fn dispatch(&self, transition: RouteTransition) -> Result<(), NavigationError>;
    }
}
