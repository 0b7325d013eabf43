//! Settings store — a flat string-to-string map on disk
//!
//! Only four keys are ever written: `salary`, `days`, `start`, `end`.
//! Loading is all-or-nothing: a missing or unreadable key means there is no
//! schedule yet and the app opens on the settings page.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::schedule::{format_time, parse_time, WorkScheduleConfig};

pub const KEY_SALARY: &str = "salary";
pub const KEY_DAYS: &str = "days";
pub const KEY_START: &str = "start";
pub const KEY_END: &str = "end";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the given keys in one write. Either every entry lands or none do.
    fn set_all(&mut self, entries: &[(&str, String)]) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_all(&mut self, entries: &[(&str, String)]) -> Result<()> {
        for (key, value) in entries {
            self.values.insert(key.to_string(), value.clone());
        }
        Ok(())
    }
}

/// JSON object on disk, e.g. `{"days": "22", "salary": "6600", ...}`
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; a corrupt
    /// one is logged and treated the same way.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("ignoring unreadable settings file {}: {e}", path.display());
                BTreeMap::new()
            }),
            Err(e) => {
                debug!("no settings at {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// Store in the per-user config directory
    pub fn open_default() -> Self {
        Self::open(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let contents = serde_json::to_string_pretty(values)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_all(&mut self, entries: &[(&str, String)]) -> Result<()> {
        let mut next = self.values.clone();
        for (key, value) in entries {
            next.insert(key.to_string(), value.clone());
        }
        self.write(&next)?;
        self.values = next;
        Ok(())
    }
}

/// Get the config directory for slowPay
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", "slowpay")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the data directory (logs live here)
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", "slowpay")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Read a complete schedule back, or `None` if any part is missing or bad.
pub fn load_schedule(store: &impl SettingsStore) -> Option<WorkScheduleConfig> {
    let salary = store.get(KEY_SALARY)?;
    let days = store.get(KEY_DAYS)?;
    let start = store.get(KEY_START)?;
    let end = store.get(KEY_END)?;

    let parsed = (|| {
        let cfg = WorkScheduleConfig {
            salary: salary.trim().parse().ok()?,
            work_days_per_month: days.trim().parse().ok()?,
            start_time: parse_time("start", &start).ok()?,
            end_time: parse_time("end", &end).ok()?,
        };
        cfg.validate().ok()?;
        Some(cfg)
    })();

    if parsed.is_none() {
        warn!(%salary, %days, %start, %end, "stored schedule is malformed, ignoring it");
    }
    parsed
}

pub fn save_schedule(store: &mut impl SettingsStore, cfg: &WorkScheduleConfig) -> Result<()> {
    store.set_all(&[
        (KEY_SALARY, cfg.salary.to_string()),
        (KEY_DAYS, cfg.work_days_per_month.to_string()),
        (KEY_START, format_time(cfg.start_time)),
        (KEY_END, format_time(cfg.end_time)),
    ])
}
