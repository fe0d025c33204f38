//! Key-value store port
//!
//! This port defines the contract for the persisted string key-value store
//! that holds session flags and preferences. Implementations are provided by
//! the infrastructure layer (in-memory, JSON file).

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The platform store could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backing data exists but cannot be decoded.
    #[error("storage corrupted: {0}")]
    Corrupted(String),

    #[error("storage io error: {0}")]
    Io(String),
}

/// Asynchronous string key-value store.
///
/// Operations may be issued concurrently. Read-after-write on the same key
/// from the same caller must observe the write; there is no ordering
/// guarantee between independent keys.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read a value, `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, overwriting any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key.
    async fn clear(&self) -> Result<(), StorageError>;
}

#[cfg(test)]
mockall::mock! {
    pub KeyValueStore {}

    #[async_trait]
    impl KeyValueStorePort for KeyValueStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
        async fn remove(&self, key: &str) -> Result<(), StorageError>;
        async fn clear(&self) -> Result<(), StorageError>;
    }
}
