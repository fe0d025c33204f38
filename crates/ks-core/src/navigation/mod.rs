//! Navigation domain module.
//!
//! Typed routes and the transition commands handed to the router.

pub mod route;
pub mod transition;

pub use route::{AuthScreen, MainTab, Route};
pub use transition::{RouteTransition, TransitionKind};
