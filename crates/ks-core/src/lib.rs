//! # ks-core
//!
//! Core domain models and session routing rules for Korean Shop.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod auth;
pub mod bootstrap;
pub mod cart;
pub mod config;
pub mod navigation;
pub mod ports;
pub mod preferences;
pub mod session;

// Re-export commonly used types at the crate root
pub use bootstrap::{BootstrapAction, BootstrapEvent, BootstrapPhase, BootstrapStateMachine};
pub use cart::{Cart, CartLine};
pub use config::AppConfig;
pub use navigation::{AuthScreen, MainTab, Route, RouteTransition, TransitionKind};
pub use preferences::{ColorScheme, Currency, Preferences, ThemePreference};
pub use session::{initial_route, SessionFlags};
