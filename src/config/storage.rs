use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The durable key-value backends. We differentiate them via a "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(tag = "type")]
pub enum StorageConfig {
    /// Lives as long as the process; nothing survives a restart.
    #[serde(rename = "memory")]
    Memory,
    /// A single JSON object on disk, rewritten after every change.
    #[serde(rename = "file")]
    File(FileStorageConfig),
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::File(FileStorageConfig::default())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct FileStorageConfig {
    pub path: PathBuf,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        FileStorageConfig {
            path: PathBuf::from("./todotron-storage.json"),
        }
    }
}

/// Where the task list lives inside the durable storage.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct TasksConfig {
    #[serde(default = "default_tasks_key")]
    pub storage_key: String,
}

fn default_tasks_key() -> String {
    "todos".to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            storage_key: default_tasks_key(),
        }
    }
}
