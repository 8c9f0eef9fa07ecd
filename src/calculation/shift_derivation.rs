//! Full shift record derivation.
//!
//! Every edit of a day saves a complete [`ShiftRecord`]: duration,
//! undertime/overtime classification, and both pay amounts are derived
//! together here, from one hourly rate snapshot, so the stored row is
//! never partially written.

use chrono::{Datelike, NaiveDate};

use crate::config::EngineSettings;
use crate::error::EngineResult;
use crate::models::{HolidaySet, ShiftRecord};

use super::day_pay::{calculate_day_pay, calculate_weekend_pay};
use super::duration::duration_or_zero;
use super::hourly_rate::derive_hourly_rate;
use super::overtime_pay::calculate_overtime_pay;
use super::working_days::is_day_off;

/// Derives the complete shift record for one day.
///
/// On a workday, minutes short of the required daily minutes become
/// undertime and minutes beyond it become overtime (at most one of the two
/// is positive); day pay is the fixed standard day pay and overtime pay is
/// the configured premium on the overtime minutes. On a weekend or holiday
/// both classifications are forced to zero and pay is derived from actual
/// minutes worked.
///
/// Malformed clock times follow the engine's lenient default and record a
/// zero duration (see
/// [`duration_or_zero`](crate::calculation::duration_or_zero)).
///
/// The derivation is idempotent: the same inputs always produce identical
/// derived fields.
///
/// # Errors
///
/// Propagates [`EngineError::NoWorkingDays`](crate::error::EngineError::NoWorkingDays)
/// when the month of `date` has no computable hourly rate; the caller must
/// suppress the save and surface "no rate available".
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_engine::calculation::derive_shift;
/// use timesheet_engine::config::EngineSettings;
/// use timesheet_engine::models::HolidaySet;
///
/// // A Monday worked exactly 09:00-18:00 with a 60-minute lunch.
/// let record = derive_shift(
///     NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     Some("09:00"),
///     Some("18:00"),
///     "",
///     &EngineSettings::default(),
///     &HolidaySet::default(),
/// )
/// .unwrap();
///
/// assert_eq!(record.duration_minutes, 540);
/// assert_eq!(record.undertime_minutes, 0);
/// assert_eq!(record.overtime_minutes, 0);
/// ```
pub fn derive_shift(
    date: NaiveDate,
    activation: Option<&str>,
    end: Option<&str>,
    notes: &str,
    settings: &EngineSettings,
    holidays: &HolidaySet,
) -> EngineResult<ShiftRecord> {
    let duration_minutes = duration_or_zero(activation, end);
    let required_minutes = settings.required_minutes();

    let hourly_rate = derive_hourly_rate(
        date.year(),
        date.month(),
        holidays,
        settings.monthly_salary,
    )?;

    let record = if is_day_off(date, holidays) {
        ShiftRecord {
            date,
            activation: activation.map(str::to_string),
            end: end.map(str::to_string),
            duration_minutes,
            undertime_minutes: 0,
            overtime_minutes: 0,
            day_pay_cents: calculate_weekend_pay(
                duration_minutes,
                hourly_rate,
                settings.lunch_minutes,
            ),
            overtime_pay_cents: 0,
            notes: notes.to_string(),
        }
    } else {
        let undertime_minutes = required_minutes.saturating_sub(duration_minutes);
        let overtime_minutes = duration_minutes.saturating_sub(required_minutes);

        ShiftRecord {
            date,
            activation: activation.map(str::to_string),
            end: end.map(str::to_string),
            duration_minutes,
            undertime_minutes,
            overtime_minutes,
            day_pay_cents: calculate_day_pay(hourly_rate),
            overtime_pay_cents: calculate_overtime_pay(
                overtime_minutes,
                hourly_rate,
                settings.overtime_multiplier,
            ),
            notes: notes.to_string(),
        }
    };

    Ok(record)
}
