//! Hourly rate derivation.
//!
//! The hourly rate of a month spreads the fixed monthly salary over the
//! month's working days at 8 paid hours per day. The unpaid lunch break is
//! excluded from the rate basis: it stretches the required shift length,
//! not the paid hours.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidaySet;

use super::working_days::working_days_in_month;

/// Paid hours per standard working day.
pub const PAID_HOURS_PER_DAY: u32 = 8;

/// Derives the hourly rate for a calendar month.
///
/// `rate = monthly_salary / (working_days × 8)`. The result is kept
/// fractional; rounding to whole minor units happens once, at the final
/// payment computation.
///
/// # Arguments
///
/// * `year` / `month` - The calendar month
/// * `holidays` - Holiday dates excluded from the working-day count
/// * `monthly_salary` - Fixed monthly salary in major currency units
///
/// # Errors
///
/// Returns [`EngineError::NoWorkingDays`] when the month has no working
/// days; callers must suppress all pay calculations for such a month and
/// report "no rate available" instead of crashing.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::derive_hourly_rate;
/// use timesheet_engine::models::HolidaySet;
///
/// // March 2025 has 21 working days.
/// let rate = derive_hourly_rate(2025, 3, &HolidaySet::default(), Decimal::new(906105, 1)).unwrap();
/// assert_eq!(rate * Decimal::from(21 * 8), Decimal::new(906105, 1));
/// ```
pub fn derive_hourly_rate(
    year: i32,
    month: u32,
    holidays: &HolidaySet,
    monthly_salary: Decimal,
) -> EngineResult<Decimal> {
    let work_days = working_days_in_month(year, month, holidays)?;

    if work_days == 0 {
        return Err(EngineError::NoWorkingDays { year, month });
    }

    Ok(monthly_salary / Decimal::from(work_days * PAID_HOURS_PER_DAY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Holiday;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// 21 working days at 90610.50/month: exact rate is 90610.50 / 168.
    #[test]
    fn test_rate_for_21_working_day_month() {
        let rate =
            derive_hourly_rate(2025, 3, &HolidaySet::default(), dec("90610.50")).unwrap();
        assert_eq!(rate, dec("90610.50") / dec("168"));
        // Spot value to 4 places.
        assert_eq!(rate.round_dp(4), dec("539.3482"));
    }

    /// rate × workDays × 8 reconstructs the salary exactly.
    #[test]
    fn test_rate_times_paid_hours_is_salary() {
        for (year, month, work_days) in [(2025, 3, 21u32), (2025, 7, 23), (2024, 2, 21)] {
            let rate =
                derive_hourly_rate(year, month, &HolidaySet::default(), dec("90610.50")).unwrap();
            let reconstructed = (rate * Decimal::from(work_days * 8)).round_dp(2);
            assert_eq!(reconstructed, dec("90610.50"), "{}-{}", year, month);
        }
    }

    #[test]
    fn test_holidays_shrink_the_divisor() {
        let no_holidays =
            derive_hourly_rate(2025, 6, &HolidaySet::default(), dec("90610.50")).unwrap();

        // 2025-06-12 is a Thursday.
        let set = HolidaySet::from_holidays(vec![Holiday {
            date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            name: "День России".to_string(),
        }]);
        let with_holiday = derive_hourly_rate(2025, 6, &set, dec("90610.50")).unwrap();

        assert!(with_holiday > no_holidays);
    }

    #[test]
    fn test_zero_working_days_signals_error() {
        let all_of_june = HolidaySet::from_holidays((1..=30).map(|d| Holiday {
            date: NaiveDate::from_ymd_opt(2025, 6, d).unwrap(),
            name: "shutdown".to_string(),
        }));

        let result = derive_hourly_rate(2025, 6, &all_of_june, dec("90610.50"));
        match result {
            Err(EngineError::NoWorkingDays { year, month }) => {
                assert_eq!((year, month), (2025, 6));
            }
            other => panic!("Expected NoWorkingDays, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_month_propagates() {
        let result = derive_hourly_rate(2025, 0, &HolidaySet::default(), dec("90610.50"));
        assert!(matches!(result, Err(EngineError::InvalidMonth { .. })));
    }

    #[test]
    fn test_rate_is_fractional_not_prerounded() {
        let rate =
            derive_hourly_rate(2025, 3, &HolidaySet::default(), dec("90610.50")).unwrap();
        // The raw rate keeps more precision than 2 decimal places.
        assert_ne!(rate, rate.round_dp(2));
    }
}
