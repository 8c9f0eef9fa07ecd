//! Weekly and monthly aggregation.
//!
//! Weekly totals classify a displayed calendar week against the five-day
//! target; monthly totals sum recorded pay over the two semimonthly
//! windows. Pending overtime is reported here as a total only; how those
//! minutes should eventually be distributed is an open product question,
//! so no distribution algorithm exists yet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{PayPeriod, ShiftRecord};
use crate::money::format_minutes_hhmm;

/// How a week's worked minutes compare to the five-day target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStatus {
    /// Total minutes exceed the target.
    Over,
    /// Total minutes fall short of the target.
    Under,
    /// Total minutes hit the target exactly.
    OnTarget,
}

/// Summary of one displayed calendar week.
///
/// The sum includes weekend days that fall inside the window even though
/// they follow different pay rules: this is a display classification, not
/// a pay calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Sum of duration minutes over the records in the window.
    pub total_minutes: u32,
    /// Five standard working days' worth of required minutes.
    pub target_minutes: u32,
    /// Classification of the total against the target.
    pub status: WeekStatus,
}

impl WeekSummary {
    /// The week's total worked time formatted as `H:MM` for display.
    pub fn total_hhmm(&self) -> String {
        format_minutes_hhmm(self.total_minutes)
    }
}

/// Summarizes a 7-day display window of shift records.
///
/// # Arguments
///
/// * `records` - The records falling in the window (any order, absent days
///   simply missing; the week may span adjacent months)
/// * `required_minutes` - The daily undertime/overtime threshold
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{summarize_week, WeekStatus};
///
/// let summary = summarize_week(&[], 540);
/// assert_eq!(summary.target_minutes, 2700);
/// assert_eq!(summary.status, WeekStatus::Under);
/// ```
pub fn summarize_week(records: &[ShiftRecord], required_minutes: u32) -> WeekSummary {
    let total_minutes: u32 = records.iter().map(|r| r.duration_minutes).sum();
    let target_minutes = 5 * required_minutes;

    let status = match total_minutes.cmp(&target_minutes) {
        std::cmp::Ordering::Greater => WeekStatus::Over,
        std::cmp::Ordering::Less => WeekStatus::Under,
        std::cmp::Ordering::Equal => WeekStatus::OnTarget,
    };

    WeekSummary {
        total_minutes,
        target_minutes,
        status,
    }
}

/// Sums `day_pay + overtime_pay` over records with any recorded pay.
pub fn sum_period_pay(records: &[ShiftRecord]) -> i64 {
    records
        .iter()
        .filter(|r| r.has_pay())
        .map(ShiftRecord::total_pay_cents)
        .sum()
}

/// Semimonthly pay totals for one calendar month, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPaySummary {
    /// Pay recorded in the 1st-15th window.
    pub first_half_cents: i64,
    /// Pay recorded in the 16th-end window.
    pub second_half_cents: i64,
}

impl MonthPaySummary {
    /// Total recorded pay for the month.
    pub fn total_cents(&self) -> i64 {
        self.first_half_cents + self.second_half_cents
    }
}

/// Splits a month's records into the two semimonthly windows and sums the
/// recorded pay of each.
///
/// Records outside the month are ignored, so callers may pass a wider
/// range (e.g. the whole displayed grid).
pub fn month_pay_summary(
    year: i32,
    month: u32,
    records: &[ShiftRecord],
) -> EngineResult<MonthPaySummary> {
    let first = PayPeriod::first_half(year, month)?;
    let second = PayPeriod::second_half(year, month)?;

    let pay_in = |period: PayPeriod| -> i64 {
        records
            .iter()
            .filter(|r| period.contains_date(r.date) && r.has_pay())
            .map(ShiftRecord::total_pay_cents)
            .sum()
    };

    Ok(MonthPaySummary {
        first_half_cents: pay_in(first),
        second_half_cents: pay_in(second),
    })
}

/// Total pending overtime minutes recorded but not yet distributed.
///
/// Takes the `(date, overtime_minutes)` pairs reported by the store's
/// pending-overtime query. Distribution itself is an explicit extension
/// point and intentionally not implemented.
pub fn total_pending_overtime(entries: &[(NaiveDate, u32)]) -> u32 {
    entries.iter().map(|(_, minutes)| minutes).sum()
}
