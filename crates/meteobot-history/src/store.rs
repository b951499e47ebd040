use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded lookup: the city the user asked about and the provider's
/// current-weather payload, verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub city: String,
    pub weather: Value,
}

type StoreData = HashMap<String, Vec<HistoryEntry>>;

/// JSON-file-backed store of per-user query history.
///
/// The whole store lives in memory and the backing file is rewritten on
/// every append. That holds up at the volumes a single bot sees; swap in an
/// append-only log behind the same interface before history grows large.
/// The mutex serializes writers, so concurrent handlers cannot interleave
/// rewrites of the shared file.
pub struct HistoryStore {
    path: PathBuf,
    data: Mutex<StoreData>,
}

impl HistoryStore {
    /// Open the store at `path`, loading any previously persisted data.
    ///
    /// A missing, unreadable, or malformed file starts the store empty
    /// rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = Self::load(&path);
        Self {
            path,
            data: Mutex::new(data),
        }
    }

    fn load(path: &Path) -> StoreData {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No history file at {}, starting empty", path.display());
                return StoreData::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read history file {}: {}", path.display(), e);
                return StoreData::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    "History file {} is malformed, starting empty: {}",
                    path.display(),
                    e
                );
                StoreData::new()
            }
        }
    }

    /// Append a successful lookup to `user_id`'s history and persist.
    ///
    /// The full store is flushed to disk before this returns. An I/O failure
    /// here means the entry may not survive a restart, so callers should
    /// treat it as fatal rather than carry on with a diverged store.
    pub fn record_query(&self, user_id: &str, city: &str, weather: Value) -> Result<()> {
        let mut data = self.data.lock();
        data.entry(user_id.to_string()).or_default().push(HistoryEntry {
            city: city.to_string(),
            weather,
        });
        self.persist(&data)
    }

    /// All recorded entries for `user_id`, oldest first. Unknown users get
    /// an empty history, never an error.
    pub fn history(&self, user_id: &str) -> Vec<HistoryEntry> {
        self.data.lock().get(user_id).cloned().unwrap_or_default()
    }

    fn persist(&self, data: &StoreData) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(data).context("Failed to serialize history")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write history file {}", self.path.display()))?;
        Ok(())
    }
}
