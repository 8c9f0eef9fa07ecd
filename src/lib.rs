//! Payroll calculation engine for a single-user timesheet calendar.
//!
//! This crate converts clock-in/clock-out times into worked minutes,
//! classifies them against weekday/holiday rules, derives pay from a fixed
//! monthly salary, and aggregates semimonthly salary totals. It also
//! provides the per-profile shift/settings store the calendar UI reads and
//! writes.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod money;
pub mod store;
