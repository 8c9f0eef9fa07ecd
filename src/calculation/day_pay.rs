//! Day pay calculation.
//!
//! Workdays are paid as a fixed standard day (8 paid hours at the month's
//! hourly rate) because the salary is monthly; undertime is tracked in
//! minutes, not deducted from pay. Weekend and holiday shifts have no
//! salary component, so they are paid from actual minutes worked instead.

use rust_decimal::Decimal;

use crate::config::STANDARD_DAY_MINUTES;
use crate::money::to_cents;

use super::hourly_rate::PAID_HOURS_PER_DAY;

/// Pay for a full standard working day, in minor units.
///
/// `day_pay = round(hourly_rate × 8)`.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::calculate_day_pay;
///
/// // 100.00/hr -> 800.00 per day.
/// assert_eq!(calculate_day_pay(Decimal::from(100)), 80000);
/// ```
pub fn calculate_day_pay(hourly_rate: Decimal) -> i64 {
    to_cents(hourly_rate * Decimal::from(PAID_HOURS_PER_DAY))
}

/// Pay for a shift worked on a weekend or holiday, in minor units.
///
/// Pay is derived from actual minutes worked at the base hourly rate. The
/// unpaid lunch break is subtracted only when a full shift was worked,
/// i.e. when the duration reaches the required daily minutes
/// (480 + lunch); shorter stints are paid for every recorded minute.
///
/// # Arguments
///
/// * `duration_minutes` - Worked minutes for the day
/// * `hourly_rate` - The month's base hourly rate
/// * `lunch_minutes` - Unpaid lunch break duration
pub fn calculate_weekend_pay(
    duration_minutes: u32,
    hourly_rate: Decimal,
    lunch_minutes: u32,
) -> i64 {
    let required_minutes = STANDARD_DAY_MINUTES + lunch_minutes;

    let paid_minutes = if duration_minutes >= required_minutes {
        duration_minutes.saturating_sub(lunch_minutes)
    } else {
        duration_minutes
    };

    to_cents(hourly_rate * Decimal::from(paid_minutes) / Decimal::from(60))
}
