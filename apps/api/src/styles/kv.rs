//! Key-value persistence capability backing the saved-styles store.
//!
//! The store depends on this trait, not on a concrete backend, so tests run
//! against `MemoryKvStore` while production uses `FileKvStore` (one JSON file
//! per key under the configured styles directory).
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

/// Synchronous string-keyed persistence. Reads that fail are reported as
/// absent by implementations where the data is plausibly corrupt rather than
/// the medium broken — durability of the UI takes priority over strict
/// validation.
pub trait KvStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<()>;
}

// ────────────────────────────────────────────────────────────────────────────
// File-backed store
// ────────────────────────────────────────────────────────────────────────────

/// Stores each key as `<dir>/<key>.json`. Keys are fixed application
/// constants, never user input, so no path sanitization is performed.
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Creates the backing directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating styles directory {}", dir.display()))?;
        Ok(FileKvStore { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("unreadable store file {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        write_atomic(&path, value)
            .with_context(|| format!("writing store file {}", path.display()))
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing store file {}", path.display())),
        }
    }
}

/// Write-then-rename so a crash mid-write never leaves a truncated file.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store (tests)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryKvStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.delete("k").expect("delete");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileKvStore::new(dir.path()).expect("store");
        assert_eq!(store.get("styles"), None);
        store.set("styles", "[1,2,3]").expect("set");
        assert_eq!(store.get("styles").as_deref(), Some("[1,2,3]"));
        store.delete("styles").expect("delete");
        assert_eq!(store.get("styles"), None);
    }

    #[test]
    fn test_file_store_overwrite_replaces_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileKvStore::new(dir.path()).expect("store");
        store.set("k", "old").expect("set");
        store.set("k", "new").expect("set");
        assert_eq!(store.get("k").as_deref(), Some("new"));
    }

    #[test]
    fn test_file_store_delete_missing_is_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileKvStore::new(dir.path()).expect("store");
        store.delete("never-written").expect("idempotent delete");
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let mut store = FileKvStore::new(dir.path()).expect("store");
            store.set("k", "v").expect("set");
        }
        let store = FileKvStore::new(dir.path()).expect("store");
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
