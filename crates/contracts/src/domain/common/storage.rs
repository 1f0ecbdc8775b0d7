use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Ошибки key-value хранилища состояния
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Хранилище недоступно (нет window, приватный режим и т.п.)
    #[error("storage is not available")]
    Unavailable,

    /// Операция чтения/записи отклонена бэкендом
    #[error("storage operation failed for key '{key}': {message}")]
    Operation { key: String, message: String },
}

/// Синхронное key-value хранилище строк.
///
/// Повторяет контракт браузерного `localStorage`: каждый контейнер
/// состояния владеет одним ключом и пишет туда JSON целиком.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory хранилище. Клоны разделяют одни и те же данные,
/// что позволяет проверять перезагрузку состояния в тестах.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
        key: &str,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.items.lock().map_err(|e| StorageError::Operation {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock(key)?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock(key)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock(key)?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_shared_between_clones() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set_item("cart", "{}").unwrap();
        assert_eq!(other.get_item("cart").unwrap().as_deref(), Some("{}"));

        other.remove_item("cart").unwrap();
        assert_eq!(storage.get_item("cart").unwrap(), None);
    }
}
