//! Key/value configuration store persisted as JSON.
//!
//! Keys are flat dotted strings (`"screenMode"`, `"sgb.borderCrop"`) shared with
//! the host runner. Values are stored as JSON numbers or booleans; the typed
//! getters accept either representation so that a hand-edited file with
//! `"sgb.borderCrop": true` and one written by the runner with `1` read the same.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct Entries(BTreeMap<String, Value>);

/// Flat configuration store
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    entries: Entries,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Empty in-memory store; `save` is a no-op until a path is attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`. A missing file yields an empty store bound to that path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no config at {}, starting with defaults", path.display());
                Entries::default()
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        Ok(Self {
            entries,
            path: Some(path),
        })
    }

    /// Write the store back to the path it was loaded from
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let text = serde_json::to_string_pretty(&self.entries).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.0.contains_key(key)
    }

    pub fn get_uint(&self, key: &str) -> Option<u32> {
        match self.entries.0.get(key)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::Bool(b) => Some(u32::from(*b)),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.entries.0.get(key)? {
            Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Value::Bool(b) => Some(i32::from(*b)),
            _ => None,
        }
    }

    /// Boolean view of an integer or boolean entry, non-zero is true
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.0.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_i64().map(|v| v != 0),
            _ => None,
        }
    }

    pub fn set_uint(&mut self, key: &str, value: u32) {
        self.entries.0.insert(key.to_owned(), Value::from(value));
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.entries.0.insert(key.to_owned(), Value::from(value));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.entries.0.insert(key.to_owned(), Value::from(value));
    }
}
