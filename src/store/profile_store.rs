//! JSON-file-backed profile store.
//!
//! Each profile owns one JSON file holding its settings map and its shift
//! records keyed by ISO-8601 date. Every operation reads the whole file
//! and writes it back atomically (temp file + rename), which is plenty for
//! a single-user calendar and keeps the file readable by hand.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

use super::{SettingsStore, ShiftStore};

/// On-disk shape of a profile file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfileData {
    #[serde(default)]
    settings: BTreeMap<String, String>,
    #[serde(default)]
    shifts: BTreeMap<NaiveDate, ShiftRecord>,
}

/// A per-profile store persisting shifts and settings to one JSON file.
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::store::{ProfileStore, SettingsStore};
///
/// let store = ProfileStore::open("profiles/anna.json")?;
/// let salary = store.load_setting("salary", "90610.5")?;
/// # Ok::<(), timesheet_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Opens a profile store at the given file path.
    ///
    /// The file is created lazily on first save; parent directories are
    /// created eagerly so the first save cannot fail on a missing
    /// directory.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| EngineError::Store {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }
        info!(path = %path.display(), "opened profile store");
        Ok(Self { path })
    }

    fn read(&self) -> EngineResult<ProfileData> {
        if !self.path.exists() {
            return Ok(ProfileData::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| EngineError::Store {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| EngineError::Store {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write(&self, data: &ProfileData) -> EngineResult<()> {
        let content = serde_json::to_string_pretty(data).map_err(|e| EngineError::Store {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, content)
            .and_then(|()| fs::rename(&tmp_path, &self.path))
            .map_err(|e| EngineError::Store {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
    }
}

impl ShiftStore for ProfileStore {
    fn load_shift(&self, date: NaiveDate) -> EngineResult<Option<ShiftRecord>> {
        Ok(self.read()?.shifts.get(&date).cloned())
    }

    fn save_shift(&self, record: &ShiftRecord) -> EngineResult<()> {
        let mut data = self.read()?;
        data.shifts.insert(record.date, record.clone());
        self.write(&data)?;
        debug!(date = %record.date, "saved shift record");
        Ok(())
    }

    fn delete_shift(&self, date: NaiveDate) -> EngineResult<()> {
        let mut data = self.read()?;
        if data.shifts.remove(&date).is_some() {
            self.write(&data)?;
            debug!(date = %date, "deleted shift record");
        }
        Ok(())
    }

    fn list_shifts_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ShiftRecord>> {
        let data = self.read()?;
        // BTreeMap range keeps the records ordered by date.
        Ok(data.shifts.range(start..=end).map(|(_, r)| r.clone()).collect())
    }

    fn find_pending_overtime(
        &self,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<(NaiveDate, u32)>> {
        let data = self.read()?;
        Ok(data
            .shifts
            .values()
            .filter(|r| {
                r.date.year() == year && r.date.month() == month && r.overtime_minutes > 0
            })
            .map(|r| (r.date, r.overtime_minutes))
            .collect())
    }
}

impl SettingsStore for ProfileStore {
    fn load_setting(&self, key: &str, default: &str) -> EngineResult<String> {
        let data = self.read()?;
        Ok(data
            .settings
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    fn save_setting(&self, key: &str, value: &str) -> EngineResult<()> {
        let mut data = self.read()?;
        data.settings.insert(key.to_string(), value.to_string());
        self.write(&data)
    }
}
