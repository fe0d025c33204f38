//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core routing rules to remain independent of
//! the platform store and the screen router.

pub mod navigator;
pub mod storage;

pub use navigator::{NavigationError, NavigatorPort};
pub use storage::{KeyValueStorePort, StorageError};
