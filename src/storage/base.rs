use std::sync::Arc;

use tracing::info;

use super::{file_storage::FileStorage, memory_storage::MemoryStorage};
use crate::config::StorageConfig;

/// Durable client-side key-value storage.
///
/// Calls never fail from the caller's point of view: backends deal with
/// their own I/O problems (logging them) and keep serving the last known
/// values.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// A descriptive name for logs.
    fn get_name(&self) -> &str;
}

/// Creates a concrete storage implementation based on the StorageConfig.
pub fn create_storage(config: &StorageConfig) -> Arc<dyn Storage> {
    match config {
        StorageConfig::Memory => {
            info!("Using in-memory storage; nothing will survive a restart.");
            Arc::new(MemoryStorage::new())
        }
        StorageConfig::File(file_config) => {
            info!("Using file storage at '{}'", file_config.path.display());
            Arc::new(FileStorage::open(&file_config.path))
        }
    }
}
