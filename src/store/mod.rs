//! Whole-blob collection storage. Collections are read and written as
//! complete JSON documents addressed by string keys; there are no partial
//! updates.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::common::error::AppError;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key of the primary session history collection.
pub const HISTORY_KEY: &str = "history";
/// Key of the mirrored household ledger collection.
pub const LEDGER_KEY: &str = "household_account_book_transactions";
/// Key of the category buckets object.
pub const CATEGORIES_KEY: &str = "household_account_book_categories";
/// Key of the machine-name records owned by the naming collaborator.
pub const MACHINES_KEY: &str = "userMachines";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("store read failed for {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("store write failed for {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// A named-collection blob store. Implementations must make each `set` an
/// all-or-nothing replacement of the keyed collection.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Loads a collection, falling back to its default when the key is absent.
pub fn load<T, S>(store: &S, key: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
    S: Store + ?Sized,
{
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| AppError::Codec {
            key: key.to_string(),
            source,
        }),
        None => Ok(T::default()),
    }
}

/// Serializes and writes a collection under its key.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
    S: Store + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| AppError::Codec {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_key_yields_default() {
        let store = MemoryStore::new();
        let value: Vec<u32> = load(&store, HISTORY_KEY).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        save(&mut store, HISTORY_KEY, &vec![1u32, 2, 3]).unwrap();
        let value: Vec<u32> = load(&store, HISTORY_KEY).unwrap();
        assert_eq!(value, [1, 2, 3]);
    }

    #[test]
    fn load_corrupt_blob_reports_the_key() {
        let mut store = MemoryStore::new();
        store.set(CATEGORIES_KEY, "not json").unwrap();
        let err = load::<Vec<u32>, _>(&store, CATEGORIES_KEY).unwrap_err();
        match err {
            AppError::Codec { key, .. } => assert_eq!(key, CATEGORIES_KEY),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
