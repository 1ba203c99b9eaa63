// Record store port: the key-value persistence the registry writes its collections to.
//
// Values are opaque strings. Every `set` replaces the whole value under a key.

pub mod file_system;
pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("quota exceeded writing {key}: {size} bytes over a quota of {quota}")]
    QuotaExceeded {
        key: String,
        size: usize,
        quota: usize,
    },

    #[error("backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, RecordStoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RecordStoreError>;
    /// Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), RecordStoreError>;
}
