//! Bootstrap domain module.
//!
//! This module defines the splash bootstrap state machine types.

pub mod state_machine;

pub use state_machine::{
    BootstrapAction, BootstrapEvent, BootstrapPhase, BootstrapStateMachine,
    DEFAULT_SPLASH_DURATION,
};
