// Whole-collection codec over the record store.
//
// Each collection is one JSON array under a fixed key. A missing key is an empty collection.
// Saving always rewrites the full array.

use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const EVENTS_KEY: &str = "events";
pub const ATTENDEES_KEY: &str = "attendees";

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error("collection {key} is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub async fn load_collection<T, TStore>(store: &TStore, key: &str) -> Result<Vec<T>, CollectionError>
where
    T: DeserializeOwned,
    TStore: RecordStore + ?Sized,
{
    match store.get(key).await? {
        None => {
            tracing::info!(key, "no stored collection, starting empty");
            Ok(Vec::new())
        }
        Some(raw) => serde_json::from_str(&raw).map_err(|source| CollectionError::Corrupt {
            key: key.to_string(),
            source,
        }),
    }
}

pub async fn save_collection<T, TStore>(
    store: &TStore,
    key: &str,
    items: &[T],
) -> Result<(), CollectionError>
where
    T: Serialize,
    TStore: RecordStore + ?Sized,
{
    let raw = serde_json::to_string(items).map_err(|source| CollectionError::Corrupt {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw).await?;
    Ok(())
}
