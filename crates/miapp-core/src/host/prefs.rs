//! Key-value preference storage: JSON file under the XDG state dir, or an
//! in-memory fallback when no writable location exists.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

use super::CapabilityError;

/// Persistent key-value store for small JSON payloads.
pub trait PreferenceStore: Send + Sync {
    fn set(&self, key: &str, value: Value) -> Result<(), CapabilityError>;
    fn get(&self, key: &str) -> Result<Option<Value>, CapabilityError>;
    fn remove(&self, key: &str) -> Result<(), CapabilityError>;
}

/// File-backed store: one JSON object, rewritten on every mutation.
pub struct FilePrefs {
    path: PathBuf,
    entries: Mutex<HashMap<String, Value>>,
}

impl FilePrefs {
    /// Opens the store at `path`, loading existing entries. A missing file
    /// is an empty store; a corrupt one is an error.
    pub fn open(path: PathBuf) -> Result<Self, CapabilityError> {
        let entries = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Default location: `~/.local/state/miapp/prefs.json`.
    pub fn open_default() -> Result<Self, CapabilityError> {
        let dir = xdg::BaseDirectories::with_prefix("miapp")?.get_state_home();
        fs::create_dir_all(&dir)?;
        Self::open(dir.join("prefs.json"))
    }

    fn persist(&self, entries: &HashMap<String, Value>) -> Result<(), CapabilityError> {
        let data = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl PreferenceStore for FilePrefs {
    fn set(&self, key: &str, value: Value) -> Result<(), CapabilityError> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    fn get(&self, key: &str) -> Result<Option<Value>, CapabilityError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), CapabilityError> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        self.persist(&entries)
    }
}

/// In-memory store used when no writable state directory exists.
#[derive(Default)]
pub struct MemoryPrefs {
    entries: Mutex<HashMap<String, Value>>,
}

impl PreferenceStore for MemoryPrefs {
    fn set(&self, key: &str, value: Value) -> Result<(), CapabilityError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Value>, CapabilityError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), CapabilityError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn file_prefs_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePrefs::open(dir.path().join("prefs.json")).unwrap();

        assert!(prefs.get("user").unwrap().is_none());
        prefs.set("user", json!({"name": "ana"})).unwrap();
        assert_eq!(prefs.get("user").unwrap(), Some(json!({"name": "ana"})));

        prefs.remove("user").unwrap();
        assert!(prefs.get("user").unwrap().is_none());
    }

    #[test]
    fn file_prefs_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let prefs = FilePrefs::open(path.clone()).unwrap();
        prefs.set("counter", json!(3)).unwrap();
        drop(prefs);

        let reopened = FilePrefs::open(path).unwrap();
        assert_eq!(reopened.get("counter").unwrap(), Some(json!(3)));
    }

    #[test]
    fn file_prefs_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            FilePrefs::open(path),
            Err(CapabilityError::Json(_))
        ));
    }

    #[test]
    fn memory_prefs_round_trip() {
        let prefs = MemoryPrefs::default();
        prefs.set("k", json!("v")).unwrap();
        assert_eq!(prefs.get("k").unwrap(), Some(json!("v")));
        prefs.remove("k").unwrap();
        assert!(prefs.get("k").unwrap().is_none());
    }
}
