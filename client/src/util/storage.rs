//! `localStorage` adapter for the roster model.
//!
//! SYSTEM CONTEXT
//! ==============
//! Queues and caches in `roster` are written against `KeyValueStore`. In the
//! browser that is `window.localStorage`; during SSR there is no storage, so
//! reads come back empty and writes report `StorageError::Unavailable`.

use roster::{KeyValueStore, StorageError};

/// Handle to the browser's `localStorage`. Cheap to construct per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(_) => None,
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(_) => None,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                message: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    leptos::logging::warn!("localStorage remove {key} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Log a failed best-effort cache write.
pub fn log_storage_error(result: Result<(), StorageError>) {
    if let Err(e) = result {
        leptos::logging::warn!("cache write skipped: {e}");
    }
}
