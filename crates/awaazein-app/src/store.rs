//! Local key-value persistence
//!
//! The credential store only needs `get`/`set` on string keys. [`FileStore`]
//! keeps them in one JSON object on disk; [`MemoryStore`] backs tests and
//! ephemeral runs.

use std::collections::{BTreeMap, HashMap};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use awaazein_core::prelude::*;
use fs2::FileExt;
use parking_lot::Mutex;

/// String key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Last value written for `key`, or `None` if it was never set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// JSON-file backed store.
///
/// Every call re-reads the file so writes from another process (for example
/// the `admin` CLI while the TUI is running) are picked up. Writes take an
/// exclusive file lock for the whole read-modify-write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self, file: &mut File) -> Result<BTreeMap<String, String>> {
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::store(&self.path, format!("read failed: {e}")))?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| Error::store(&self.path, format!("corrupt store: {e}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&self.path)
            .map_err(|e| Error::store(&self.path, format!("open failed: {e}")))?;
        FileExt::lock_shared(&file)
            .map_err(|e| Error::store(&self.path, format!("lock failed: {e}")))?;

        let mut entries = self.read_entries(&mut file)?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::store(&self.path, format!("create dir failed: {e}")))?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| Error::store(&self.path, format!("open failed: {e}")))?;

        // Held until `file` is dropped
        FileExt::lock_exclusive(&file)
            .map_err(|e| Error::store(&self.path, format!("lock failed: {e}")))?;

        let mut entries = self.read_entries(&mut file)?;
        entries.insert(key.to_string(), value.to_string());
        let content =
            serde_json::to_string_pretty(&entries).context("Failed to serialize store entries")?;

        rewrite(&mut file, &content)
            .map_err(|e| Error::store(&self.path, format!("write failed: {e}")))?;

        debug!("Stored key {:?} in {:?}", key, self.path);
        Ok(())
    }
}

fn rewrite(file: &mut File, content: &str) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
