//! Session domain module.
//!
//! Persisted session flags, their key names, and the landing-route policy.

mod flags;
pub mod keys;

pub use flags::{initial_route, SessionFlags};
