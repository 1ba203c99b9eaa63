// Filesystem record store.
//
// One file per key, `<dir>/<key>.json`. Writes land in a temporary sibling first and are
// renamed over the target, so a reader never sees a half-written collection.

use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    /// Creates `dir` (and parents) when it does not exist yet.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, RecordStoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, RecordStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RecordStoreError::Backend(format!("invalid key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait::async_trait]
impl RecordStore for FileRecordStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RecordStoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RecordStoreError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        tracing::debug!(key, bytes = value.len(), path = %path.display(), "record written");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), RecordStoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
