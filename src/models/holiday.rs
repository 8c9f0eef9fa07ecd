//! Holiday calendar models.
//!
//! This module contains the [`Holiday`] and [`HolidaySet`] types. Holidays
//! are fixed non-working dates (regardless of weekday) loaded once from
//! configuration resources and immutable during a session.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single non-working date with a human-readable label.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_engine::models::Holiday;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
///     name: "День Победы".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday.
    pub name: String,
}

/// The set of holiday dates known to the engine, with labels.
///
/// Membership makes a date a non-working day for working-day counting and
/// switches a worked shift to the weekend/holiday pay policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    labels: BTreeMap<NaiveDate, String>,
}

impl HolidaySet {
    /// Builds a set from a list of holidays.
    ///
    /// Duplicate dates keep the last label seen.
    pub fn from_holidays(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let labels = holidays.into_iter().map(|h| (h.date, h.name)).collect();
        Self { labels }
    }

    /// Returns true if the date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.labels.contains_key(&date)
    }

    /// Returns the holiday label for a date, if the date is a holiday.
    pub fn label(&self, date: NaiveDate) -> Option<&str> {
        self.labels.get(&date).map(String::as_str)
    }

    /// Number of holiday dates in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the set contains no holidays.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
