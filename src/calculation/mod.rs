//! Calculation logic for the payroll engine.
//!
//! This module contains all the pure calculation functions: clock-time
//! parsing and shift duration, working-day counting, monthly hourly rate
//! derivation, day/weekend/overtime pay, full shift record derivation,
//! and weekly/monthly aggregation. Everything here is a pure function
//! over explicit inputs; no I/O and no shared state.

mod aggregation;
mod day_pay;
mod duration;
mod hourly_rate;
mod overtime_pay;
mod shift_derivation;
mod working_days;

pub use aggregation::{
    MonthPaySummary, WeekStatus, WeekSummary, month_pay_summary, sum_period_pay, summarize_week,
    total_pending_overtime,
};
pub use day_pay::{calculate_day_pay, calculate_weekend_pay};
pub use duration::{calculate_duration, duration_or_zero, parse_clock_time};
pub use hourly_rate::{PAID_HOURS_PER_DAY, derive_hourly_rate};
pub use overtime_pay::calculate_overtime_pay;
pub use shift_derivation::derive_shift;
pub use working_days::{is_day_off, is_working_day, working_days_in_month};
