//! Браузерный `localStorage` как хранилище сторов.

use contracts::domain::common::{KeyValueStorage, StorageError};
use web_sys::window;

/// Адаптер `localStorage`. Окно запрашивается при каждом обращении,
/// поэтому значение не держит JS-объектов и может жить в сигналах.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn operation_error(key: &str, err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Operation {
        key: key.to_string(),
        message: format!("{:?}", err),
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| operation_error(key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| operation_error(key, e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| operation_error(key, e))
    }
}
