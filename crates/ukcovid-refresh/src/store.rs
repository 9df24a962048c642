//! Minimal persisted key-value state: the last-seen `Last-Modified`
//! string and the last notification content, both used for duplicate
//! suppression across background refresh runs.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or saving the persisted state file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state file serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The persisted pair. Empty strings mean "never seen".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub last_notification: String,
}

/// JSON-file-backed store for [`PersistedState`].
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StateStore { path: path.into() }
    }

    /// Loads the persisted state; a missing file yields the default.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file exists but cannot be read
    /// or parsed.
    pub fn load(&self) -> Result<PersistedState, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PersistedState::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the persisted state, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O failure.
    pub fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> StateStore {
        let path = std::env::temp_dir().join(format!("ukcovid-{}-{name}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        StateStore::new(path)
    }

    #[test]
    fn missing_file_loads_default() {
        let store = temp_store("missing");
        assert_eq!(store.load().unwrap(), PersistedState::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        let state = PersistedState {
            last_modified: "Tue, 05 Jan 2021 16:00:02 GMT".to_owned(),
            last_notification: "Latest update for Tuesday 5 January...".to_owned(),
        };
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_default() {
        let path = std::env::temp_dir().join(format!("ukcovid-{}-corrupt.json", std::process::id()));
        fs::write(&path, "not json").unwrap();
        let store = StateStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Serialize(_))));
    }
}
