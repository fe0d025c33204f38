//! Korean Shop command line shell.
//!
//! Loads configuration, initialises tracing, wires the file-backed store and
//! the stack router into [`ks_app::AppDeps`], and runs one command.

pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
