use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRecordStore {
    values: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
    rejected_keys: HashSet<String>,
    is_offline: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any write that would push the total stored bytes over `quota`.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Makes every later `set` on `key` fail, leaving other keys writable.
    pub fn reject_writes_to(&mut self, key: impl Into<String>) {
        self.rejected_keys.insert(key.into());
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        if self.rejected_keys.contains(key) {
            return Err(RecordStoreError::Backend(format!("write rejected for {key}")));
        }
        let mut guard = self.values.write().await;
        if let Some(quota) = self.quota {
            let others: usize = guard
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let size = others + key.len() + value.len();
            if size > quota {
                return Err(RecordStoreError::QuotaExceeded {
                    key: key.to_string(),
                    size,
                    quota,
                });
            }
        }
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        self.values.write().await.remove(key);
        Ok(())
    }
}
