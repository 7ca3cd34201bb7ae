//! # Key-Value Persistence
//!
//! The storefront persists three blobs (the cart, the recent search history and the
//! search analytics log) as JSON strings under fixed keys. [`KeyValueStore`] is the seam;
//! [`MemoryStore`] backs tests and [`FileStore`] writes one file per key.
//!
//! Reads are forgiving: a blob that fails to parse is logged and treated as empty, so a
//! corrupt file never blocks a session. Writes are synchronous and fire-and-forget from
//! the caller's point of view; the actors log failures and carry on.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Key holding the cart's line items.
pub const CART_KEY: &str = "luxury_kitchen_cart";
/// Key holding the recent search queries.
pub const SEARCH_HISTORY_KEY: &str = "luxury_kitchen_search_history";
/// Key holding the search analytics records.
pub const SEARCH_ANALYTICS_KEY: &str = "luxury_kitchen_search_analytics";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-to-string store, the shape of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and parses the blob under `key`.
///
/// Missing keys, unreadable storage and malformed JSON all yield `T::default()`; the
/// last two are logged at `warn`.
pub fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!(key, error = %e, "Failed to read from storage");
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Discarding unparsable stored value");
            T::default()
        }
    }
}

/// Serializes `value` and writes it under `key`.
pub fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}
