use serde::{Deserialize, Serialize};

use super::Route;

/// How a transition changes the router's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Swap the top of the stack.
    Replace,
    /// Replace the whole stack so history cannot return to earlier screens.
    Reset,
    /// Append on top of the stack.
    Push,
    /// Pop the top of the stack.
    GoBack,
}

/// Command consumed by the router.
///
/// Produced by screen handlers (login, logout, onboarding completion) and by
/// the bootstrap sequencer; owned transiently until dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTransition {
    pub kind: TransitionKind,
    /// Ignored for [`TransitionKind::GoBack`].
    pub target: Route,
    pub stack_index: Option<usize>,
}

impl RouteTransition {
    pub fn replace(target: Route) -> Self {
        Self {
            kind: TransitionKind::Replace,
            target,
            stack_index: None,
        }
    }

    /// Reset the stack to a single `target` entry focused at index 0.
    pub fn reset(target: Route) -> Self {
        Self {
            kind: TransitionKind::Reset,
            target,
            stack_index: Some(0),
        }
    }

    pub fn push(target: Route) -> Self {
        Self {
            kind: TransitionKind::Push,
            target,
            stack_index: None,
        }
    }

    pub fn go_back() -> Self {
        Self {
            kind: TransitionKind::GoBack,
            target: Route::Splash,
            stack_index: None,
        }
    }
}
