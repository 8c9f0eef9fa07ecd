//! Monetary rounding and formatting helpers.
//!
//! All money in the engine is an integer count of minor currency units
//! (cents/kopecks). Intermediate arithmetic happens in [`Decimal`]; the
//! single rounding step to whole minor units lives here so every computed
//! value is rounded exactly once, with one documented strategy.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a major-unit amount to an integer count of minor units.
///
/// Rounding is half-away-from-zero (so 0.005 becomes 1 cent). Stored
/// cent values are never re-rounded on read.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use timesheet_engine::money::to_cents;
///
/// assert_eq!(to_cents(Decimal::from_str("4314.785714").unwrap()), 431479);
/// assert_eq!(to_cents(Decimal::from_str("800.00").unwrap()), 80000);
/// ```
pub fn to_cents(amount: Decimal) -> i64 {
    let cents = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // Salary-scale amounts always fit i64 cents; saturate rather than wrap
    // if a caller ever feeds something absurd.
    cents.to_i64().unwrap_or(i64::MAX)
}

/// Converts an integer count of minor units back to a major-unit Decimal.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::money::cents_to_decimal;
///
/// assert_eq!(cents_to_decimal(431486), Decimal::new(431486, 2));
/// ```
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Formats a minute count as `H:MM` (e.g. 540 -> "9:00").
///
/// Used for displaying durations, undertime, and overtime totals.
pub fn format_minutes_hhmm(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
