//! Durable key/value storage backing the history store.
//!
//! Storage is a capability: the store only sees a string key mapping to a
//! string value, so tests can substitute a memory map and the TUI can keep
//! using JSON files under the user's home directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// A single-key string storage capability.
///
/// `get` returns `None` when the key is absent or the backend cannot be
/// read; callers are expected to treat that as "no data", not as an error.
pub trait KeyStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Default on-disk location: `~/.revise-term`.
pub fn default_storage_dir() -> PathBuf {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".revise-term")
}

/// File-backed storage: each key lives in its own `<key>.json` file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn open_default() -> Self {
        Self::new(default_storage_dir())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        write_atomic(&self.key_path(key), value.as_bytes())
    }
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create storage directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Write through a sibling temp file then rename, so a crash mid-write
/// never leaves a truncated value behind.
fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data).with_context(|| format!("Failed to write temp file: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace {} with {}", path.display(), tmp.display()))?;
    Ok(())
}

/// In-memory storage used by tests and as a degraded fallback when the
/// on-disk location is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    map: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
