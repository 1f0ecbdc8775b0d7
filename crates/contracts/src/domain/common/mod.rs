//! Common types and traits for all client-side state containers

pub mod storage;
pub mod store;

// Re-exports
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use store::{StateContainer, Store, StoreError};
