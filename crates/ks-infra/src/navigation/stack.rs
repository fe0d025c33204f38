use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use ks_core::navigation::{Route, RouteTransition, TransitionKind};
use ks_core::ports::{NavigationError, NavigatorPort};

/// Headless router keeping an ordered history of routes.
///
/// The top of the stack is the visible screen. A freshly built navigator
/// shows [`Route::Splash`].
pub struct StackNavigator {
    stack: Mutex<Vec<Route>>,
}

impl Default for StackNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl StackNavigator {
    pub fn new() -> Self {
        Self::with_root(Route::Splash)
    }

    pub fn with_root(root: Route) -> Self {
        Self {
            stack: Mutex::new(vec![root]),
        }
    }

    /// Snapshot of the history, bottom first.
    pub async fn stack(&self) -> Vec<Route> {
        self.stack.lock().await.clone()
    }

    pub async fn depth(&self) -> usize {
        self.stack.lock().await.len()
    }
}

#[async_trait]
impl NavigatorPort for StackNavigator {
    async fn current_route(&self) -> Option<Route> {
        self.stack.lock().await.last().cloned()
    }

    async fn dispatch(&self, transition: RouteTransition) -> Result<(), NavigationError> {
        let mut stack = self.stack.lock().await;
        let from = stack.last().cloned();

        match transition.kind {
            TransitionKind::Replace => {
                stack.pop();
                stack.push(transition.target);
            }
            TransitionKind::Reset => {
                if let Some(index) = transition.stack_index.filter(|index| *index > 0) {
                    debug!(index, "reset index clamped to single-entry stack");
                }
                stack.clear();
                stack.push(transition.target);
            }
            TransitionKind::Push => stack.push(transition.target),
            TransitionKind::GoBack => {
                if stack.len() <= 1 {
                    return Err(NavigationError::NothingToGoBackTo);
                }
                stack.pop();
            }
        }

        info!(
            kind = ?transition.kind,
            from = %from.map(|r| r.to_string()).unwrap_or_default(),
            to = %stack.last().map(|r| r.to_string()).unwrap_or_default(),
            depth = stack.len(),
            "navigated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ks_core::navigation::MainTab;

    #[tokio::test]
    async fn starts_on_splash() {
        let navigator = StackNavigator::new();
        assert_eq!(navigator.current_route().await, Some(Route::Splash));
        assert_eq!(navigator.depth().await, 1);
    }

    #[tokio::test]
    async fn reset_leaves_single_entry() {
        let navigator = StackNavigator::new();
        navigator.navigate(Route::Settings).await.unwrap();
        navigator.navigate(Route::Checkout).await.unwrap();

        navigator.reset(Route::main()).await.unwrap();

        assert_eq!(navigator.stack().await, vec![Route::main()]);
        assert_eq!(
            navigator.go_back().await,
            Err(NavigationError::NothingToGoBackTo)
        );
    }

    #[tokio::test]
    async fn reset_with_out_of_range_index_is_clamped() {
        let navigator = StackNavigator::new();
        let mut transition = RouteTransition::reset(Route::auth());
        transition.stack_index = Some(7);

        navigator.dispatch(transition).await.unwrap();

        assert_eq!(navigator.stack().await, vec![Route::auth()]);
    }

    #[tokio::test]
    async fn replace_swaps_top_only() {
        let navigator = StackNavigator::with_root(Route::main());
        navigator.navigate(Route::Settings).await.unwrap();

        navigator.replace(Route::Checkout).await.unwrap();

        assert_eq!(navigator.stack().await, vec![Route::main(), Route::Checkout]);
    }

    #[tokio::test]
    async fn push_then_go_back_returns_to_previous() {
        let navigator = StackNavigator::with_root(Route::Main {
            tab: MainTab::Categories,
        });
        navigator
            .navigate(Route::ProductDetail {
                product_id: "p-42".to_string(),
            })
            .await
            .unwrap();

        navigator.go_back().await.unwrap();

        assert_eq!(
            navigator.current_route().await,
            Some(Route::Main {
                tab: MainTab::Categories
            })
        );
    }
}
