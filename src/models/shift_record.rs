//! Shift record model.
//!
//! This module defines [`ShiftRecord`], the per-day row the calendar UI
//! edits and the store persists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day's shift with all derived fields.
///
/// A record is created or overwritten whole on each edit of a given date:
/// the derived fields (duration, undertime, overtime, both pay amounts)
/// are always computed together at save time from the activation and end
/// times, never edited independently. An absent record means "no data for
/// this day".
///
/// Clock times are wall-clock `HH:MM` strings with no timezone, exactly as
/// entered; pay amounts are integer minor currency units.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_engine::models::ShiftRecord;
///
/// let record = ShiftRecord {
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     activation: Some("09:00".to_string()),
///     end: Some("18:00".to_string()),
///     duration_minutes: 540,
///     undertime_minutes: 0,
///     overtime_minutes: 0,
///     day_pay_cents: 431479,
///     overtime_pay_cents: 0,
///     notes: String::new(),
/// };
/// assert!(record.has_pay());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The calendar date of the shift (unique key).
    pub date: NaiveDate,
    /// Shift activation time of day (`HH:MM`), if recorded.
    pub activation: Option<String>,
    /// Shift end time of day (`HH:MM`), if recorded.
    pub end: Option<String>,
    /// Worked minutes; 0 when either clock time is absent.
    pub duration_minutes: u32,
    /// Minutes short of the required daily minutes on a workday.
    pub undertime_minutes: u32,
    /// Minutes beyond the required daily minutes on a workday.
    pub overtime_minutes: u32,
    /// Day pay in minor currency units.
    pub day_pay_cents: i64,
    /// Overtime pay in minor currency units.
    pub overtime_pay_cents: i64,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
}

impl ShiftRecord {
    /// Returns true if any pay was recorded for this day.
    pub fn has_pay(&self) -> bool {
        self.day_pay_cents != 0 || self.overtime_pay_cents != 0
    }

    /// Total recorded pay for the day in minor units.
    pub fn total_pay_cents(&self) -> i64 {
        self.day_pay_cents + self.overtime_pay_cents
    }
}
