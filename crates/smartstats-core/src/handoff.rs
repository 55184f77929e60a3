// File: crates/smartstats-core/src/handoff.rs
// Summary: Single-slot, single-consumer hand-off of a suggestion from the analysis flow to chart creation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::HandoffError;
use crate::suggestion::Suggestion;

/// Key of the hand-off slot in the backing store.
pub const HANDOFF_KEY: &str = "pendingChartData";

/// Minimal persistent key-value store the hand-off depends on.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, HandoffError>;
    fn set(&self, key: &str, value: String) -> Result<(), HandoffError>;
    fn clear(&self, key: &str) -> Result<(), HandoffError>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HandoffError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), HandoffError> {
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), HandoffError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// One file per key under a directory, so separate processes can hand off.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    fn path(&self, key: &str) -> Result<PathBuf, HandoffError> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(HandoffError::Store(format!("invalid key {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, HandoffError> {
        match std::fs::read_to_string(self.path(key)?) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: String) -> Result<(), HandoffError> {
        let path = self.path(key)?;
        std::fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.partial");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), HandoffError> {
        match std::fs::remove_file(self.path(key)?) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// What the analysis flow leaves for chart creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffPayload {
    /// Statistics shown with the suggestion (local profile or service stats).
    #[serde(default)]
    pub analysis: Option<Value>,
    pub suggestion: Suggestion,
    #[serde(default, alias = "csvData")]
    pub raw_input: String,
    #[serde(default, alias = "prompt")]
    pub prompt_text: String,
    pub timestamp: DateTime<Utc>,
}

impl HandoffPayload {
    pub fn new(suggestion: Suggestion, analysis: Option<Value>, raw_input: &str, prompt_text: &str) -> Self {
        Self {
            analysis,
            suggestion,
            raw_input: raw_input.to_string(),
            prompt_text: prompt_text.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Result of claiming the slot.
pub enum Claim<'a, S: KeyValueStore> {
    /// Destination was known; the slot is already cleared.
    Ready { payload: HandoffPayload, destination: String },
    /// Destination must be chosen first; the slot stays filled until
    /// `materialize` succeeds or `cancel` is called.
    NeedsDestination(PendingHandoff<'a, S>),
}

pub struct PendingHandoff<'a, S: KeyValueStore> {
    slot: &'a HandoffSlot<S>,
    payload: HandoffPayload,
}

impl<'a, S: KeyValueStore> PendingHandoff<'a, S> {
    pub fn payload(&self) -> &HandoffPayload { &self.payload }

    /// Build the chart into `destination`; the slot is cleared only if `build` succeeds.
    pub fn materialize<T, E>(
        self,
        destination: &str,
        build: impl FnOnce(&HandoffPayload, &str) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<HandoffError>,
    {
        let out = build(&self.payload, destination)?;
        self.slot.store.clear(&self.slot.key)?;
        info!(destination, "hand-off materialized");
        Ok(out)
    }

    pub fn cancel(self) -> Result<(), HandoffError> {
        self.slot.store.clear(&self.slot.key)?;
        info!("hand-off cancelled");
        Ok(())
    }
}

/// The named slot over a store. Writes overwrite; reading is claim-and-clear.
pub struct HandoffSlot<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> HandoffSlot<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, HANDOFF_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn store(&self) -> &S { &self.store }

    pub fn write(&self, payload: &HandoffPayload) -> Result<(), HandoffError> {
        let text = serde_json::to_string(payload)?;
        self.store.set(&self.key, text)?;
        debug!(key = %self.key, "hand-off written");
        Ok(())
    }

    /// Look without consuming.
    pub fn peek(&self) -> Result<Option<HandoffPayload>, HandoffError> {
        self.load()
    }

    /// Consume the slot. With a destination the slot is cleared now;
    /// without one the caller gets a pending hand-off to resolve.
    pub fn claim(&self, destination: Option<&str>) -> Result<Option<Claim<'_, S>>, HandoffError> {
        let Some(payload) = self.load()? else {
            return Ok(None);
        };
        match destination.map(str::trim).filter(|d| !d.is_empty()) {
            Some(dest) => {
                self.store.clear(&self.key)?;
                debug!(destination = dest, "hand-off claimed");
                Ok(Some(Claim::Ready { payload, destination: dest.to_string() }))
            }
            None => Ok(Some(Claim::NeedsDestination(PendingHandoff { slot: self, payload }))),
        }
    }

    fn load(&self) -> Result<Option<HandoffPayload>, HandoffError> {
        let Some(text) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&text) {
            Ok(p) => Ok(Some(p)),
            Err(e) => {
                warn!(error = %e, "discarding corrupt hand-off payload");
                self.store.clear(&self.key)?;
                Err(HandoffError::Corrupt(e))
            }
        }
    }
}
