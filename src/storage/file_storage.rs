use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use tracing::{debug, error, warn};

use super::Storage;
use crate::utils::log_throttle::should_emit;

const WRITE_FAILURE_LOG_WINDOW: Duration = Duration::from_secs(30);

/// Storage persisted as a single JSON object (`{"key": "value", ...}`).
///
/// The whole file is read once on open and rewritten after every change.
/// An unreadable or corrupt file is treated as empty.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = load_entries(&path);
        debug!(
            "Opened file storage '{}' with {} entries",
            path.display(),
            entries.len()
        );
        FileStorage {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) {
        if let Err(e) = write_entries(&self.path, entries) {
            if let Some(suppressed_count) =
                should_emit("storage.file.write_failed", WRITE_FAILURE_LOG_WINDOW)
            {
                error!(
                    event_name = "storage.file.write_failed",
                    event_domain = "storage",
                    path = %self.path.display(),
                    suppressed_count,
                    "failed to persist storage file: {}",
                    e
                );
            }
        }
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            warn!("Could not read storage file '{}': {}", path.display(), e);
            return BTreeMap::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Storage file '{}' is corrupt, starting empty: {}",
                path.display(),
                e
            );
            BTreeMap::new()
        }
    }
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(entries)?;
    // Write next to the target and rename so a crash never leaves half a file.
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, body)?;
    fs::rename(&tmp, path)
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.remove(key).is_some() {
            self.flush(&entries);
        }
    }

    fn get_name(&self) -> &str {
        "file"
    }
}
