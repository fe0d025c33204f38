//! Korean Shop Application Orchestration Layer
//!
//! This crate contains session use cases and the bootstrap orchestration.

pub mod deps;
pub mod usecases;

pub use deps::{AppDeps, UseCases};
