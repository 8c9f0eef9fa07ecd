//! Per-profile persistence for shifts and settings.
//!
//! The engine itself is pure; these traits are the contracts the calendar
//! UI drives around it. Callers are responsible for
//! read-then-compute-then-write sequencing; this is a single-user desktop
//! store, so no locking is provided.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::ShiftRecord;

mod profile_store;

pub use profile_store::ProfileStore;

/// Storage of per-day shift records keyed by calendar date.
pub trait ShiftStore {
    /// Loads the record for a date, or `None` when the day has no data.
    fn load_shift(&self, date: NaiveDate) -> EngineResult<Option<ShiftRecord>>;

    /// Creates or overwrites the record for `record.date`.
    ///
    /// A save always writes the whole record; derived fields are never
    /// persisted piecemeal.
    fn save_shift(&self, record: &ShiftRecord) -> EngineResult<()>;

    /// Removes the record for a date. Removing an absent date is a no-op.
    fn delete_shift(&self, date: NaiveDate) -> EngineResult<()>;

    /// Returns the records with `start <= date <= end`, ordered by date.
    fn list_shifts_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ShiftRecord>>;

    /// Returns `(date, overtime_minutes)` for every record of the month
    /// with positive overtime minutes, ordered by date.
    fn find_pending_overtime(&self, year: i32, month: u32)
    -> EngineResult<Vec<(NaiveDate, u32)>>;
}

/// Key/value persistence for profile settings.
pub trait SettingsStore {
    /// Loads a setting, falling back to `default` when the key is absent.
    fn load_setting(&self, key: &str, default: &str) -> EngineResult<String>;

    /// Creates or overwrites a setting.
    fn save_setting(&self, key: &str, value: &str) -> EngineResult<()>;
}
