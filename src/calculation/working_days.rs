//! Working-day counting.
//!
//! A working day is a weekday (Mon-Fri) that is not in the holiday set.
//! The count feeds the hourly rate derivation: the fixed monthly salary is
//! spread over the month's working days.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::EngineResult;
use crate::models::{HolidaySet, last_day_of_month};

/// Returns true if the date is a weekday outside the holiday set.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_engine::calculation::is_working_day;
/// use timesheet_engine::models::HolidaySet;
///
/// let holidays = HolidaySet::default();
/// // 2025-03-03 is a Monday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), &holidays));
/// // 2025-03-08 is a Saturday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(), &holidays));
/// ```
pub fn is_working_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !is_day_off(date, holidays)
}

/// Returns true for weekend days and holidays.
///
/// Days off follow the weekend/holiday pay policy: no undertime or
/// overtime is recorded and pay is derived from actual minutes worked.
pub fn is_day_off(date: NaiveDate, holidays: &HolidaySet) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || holidays.is_holiday(date)
}

/// Counts the working days of a calendar month.
///
/// # Arguments
///
/// * `year` / `month` - The calendar month to count
/// * `holidays` - Holiday dates excluded from the count
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`](crate::error::EngineError::InvalidMonth)
/// when the month is out of range.
pub fn working_days_in_month(year: i32, month: u32, holidays: &HolidaySet) -> EngineResult<u32> {
    let last = last_day_of_month(year, month)?;

    let count = (1..=last.day())
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| is_working_day(*date, holidays))
        .count();

    Ok(count as u32)
}
