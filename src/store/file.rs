use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::{KeyValueStore, StoreError};

/// File-backed key-value store: the whole key map lives in one JSON file.
///
/// Every write serializes the full map to a sibling temp file and renames it
/// over the original, so a reader never observes a partial write. Cloning
/// shares the same in-memory map and file path.
#[derive(Clone)]
pub struct FileStore {
    path: PathBuf,
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing map. A missing file is
    /// an empty store; an undecodable file is logged and treated as empty
    /// (the old bytes stay on disk until the first successful write).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(err) => {
                    log::warn!(
                        "store file {} is not decodable, starting empty: {}",
                        path.display(),
                        err
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };

        Ok(Self {
            path,
            values: Arc::new(RwLock::new(values)),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &HashMap<String, String>) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec(values).map_err(|e| StoreError::Serde(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        // Persist the candidate map before touching the shared one, so a
        // failed write leaves memory and disk agreeing on the old state.
        let mut next = values.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *values = next;
        Ok(())
    }
}
