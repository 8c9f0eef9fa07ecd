//! Overtime pay calculation.
//!
//! Overtime minutes beyond the required daily minutes are compensated at
//! a premium over the base hourly rate. The premium is the configured
//! [`EngineSettings::overtime_multiplier`](crate::config::EngineSettings)
//! (default 1.5), never a silently hard-coded factor.

use rust_decimal::Decimal;

use crate::money::to_cents;

/// Pay for overtime minutes at a premium rate, in minor units.
///
/// `pay = round(hourly_rate × multiplier × minutes / 60)`, rounded once.
/// Pay scales linearly with minutes: doubling the minutes doubles the pay
/// (modulo cent rounding).
///
/// # Arguments
///
/// * `overtime_minutes` - Minutes worked beyond the required daily minutes
/// * `hourly_rate` - The month's base hourly rate
/// * `multiplier` - The overtime premium multiplier
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::calculate_overtime_pay;
/// use timesheet_engine::config::DEFAULT_OVERTIME_MULTIPLIER;
///
/// // One hour at 100.00/hr with the default 1.5 premium.
/// let pay = calculate_overtime_pay(60, Decimal::from(100), DEFAULT_OVERTIME_MULTIPLIER);
/// assert_eq!(pay, 15000);
/// ```
pub fn calculate_overtime_pay(
    overtime_minutes: u32,
    hourly_rate: Decimal,
    multiplier: Decimal,
) -> i64 {
    if overtime_minutes == 0 {
        return 0;
    }

    to_cents(hourly_rate * multiplier * Decimal::from(overtime_minutes) / Decimal::from(60))
}
