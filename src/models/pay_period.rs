//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: the semimonthly windows
//! (days 1-15 and 16 to end of month) used for salary aggregation. Pay
//! periods are derived on demand and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range used for salary aggregation.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_engine::models::PayPeriod;
///
/// let first = PayPeriod::first_half(2025, 2).unwrap();
/// assert!(first.contains_date(NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()));
/// assert!(!first.contains_date(NaiveDate::from_ymd_opt(2025, 2, 16).unwrap()));
///
/// let second = PayPeriod::second_half(2025, 2).unwrap();
/// assert_eq!(second.end_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// The first semimonthly window of a month: days 1 through 15.
    pub fn first_half(year: i32, month: u32) -> EngineResult<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(EngineError::InvalidMonth { year, month })?;
        // Every month has a 15th, so this cannot fail once the 1st exists.
        let end_date = NaiveDate::from_ymd_opt(year, month, 15)
            .ok_or(EngineError::InvalidMonth { year, month })?;
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// The second semimonthly window of a month: day 16 through the last day.
    pub fn second_half(year: i32, month: u32) -> EngineResult<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 16)
            .ok_or(EngineError::InvalidMonth { year, month })?;
        Ok(Self {
            start_date,
            end_date: last_day_of_month(year, month)?,
        })
    }

    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Returns the last calendar day of a month.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    // month 0 would otherwise read as "the month before January" and
    // yield Dec 31 of the previous year.
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth { year, month });
    }
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .ok_or(EngineError::InvalidMonth { year, month })
}
