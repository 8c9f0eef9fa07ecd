//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod pay_period;
mod shift_record;

pub use holiday::{Holiday, HolidaySet};
pub use pay_period::PayPeriod;
pub use shift_record::ShiftRecord;

pub(crate) use pay_period::last_day_of_month;
