//! File-backed key-value store with JSON payloads.
//!
//! One file per key. Reads fall back to a caller-supplied default on any
//! failure; writes are best-effort and atomic (tmp file + rename).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const KEY_HISTORY: &str = "translation_history";
pub const KEY_FAVORITES: &str = "translation_favorites";
pub const KEY_AUTO_PLAY: &str = "auto_play_audio";

#[derive(Debug, thiserror::Error)]
enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`. Creating the directory is best-effort;
    /// a store over an unwritable path still serves defaults on read.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("failed to create store dir {}: {}", dir.display(), e);
        }

        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the value under `key`, or `default` when the key is missing or
    /// its payload does not parse. Never errors.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.key_path(key);

        if !path.exists() {
            return default;
        }

        match self.try_read(&path) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("store read {} failed, using default: {}", key, e);
                default
            }
        }
    }

    /// Write `value` under `key`. Failures are logged, never surfaced; a
    /// failed write leaves the previous payload intact.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            tracing::error!("store write {} failed: {}", key, e);
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn try_read<T: DeserializeOwned>(&self, path: &Path) -> Result<T, StoreError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn try_write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;

        let path = self.key_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp, json.as_bytes())?;
        fs::rename(&tmp, &path)?;

        Ok(())
    }
}
