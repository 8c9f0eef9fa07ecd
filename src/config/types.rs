//! Engine settings.
//!
//! Salary, lunch duration, and the overtime premium form an explicit
//! configuration struct handed to every calculation call, so the engine
//! itself stays a pure function library with no ambient state.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::store::SettingsStore;

/// Premium multiplier applied to the base hourly rate for overtime pay.
///
/// Overtime is compensated at time-and-a-half unless the profile
/// configures a different `overtime_multiplier`.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Minutes of a standard paid shift, before the unpaid lunch break.
pub const STANDARD_DAY_MINUTES: u32 = 480;

/// The calculation inputs that apply to every shift of a profile.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::EngineSettings;
///
/// let settings = EngineSettings::default();
/// assert_eq!(settings.lunch_minutes, 60);
/// assert_eq!(settings.required_minutes(), 540);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Fixed monthly salary in major currency units.
    pub monthly_salary: Decimal,
    /// Unpaid lunch break duration in minutes.
    pub lunch_minutes: u32,
    /// Premium multiplier for overtime pay.
    pub overtime_multiplier: Decimal,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            monthly_salary: Decimal::new(906105, 1),
            lunch_minutes: 60,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl EngineSettings {
    /// Required daily minutes: the standard paid shift plus the unpaid
    /// lunch break. This is the undertime/overtime threshold.
    pub fn required_minutes(&self) -> u32 {
        STANDARD_DAY_MINUTES + self.lunch_minutes
    }

    /// Reads settings from a profile's key/value settings store.
    ///
    /// Missing keys fall back to the defaults; present but unparseable
    /// values are reported as [`EngineError::ConfigParse`] rather than
    /// silently replaced.
    pub fn from_store<S: SettingsStore>(store: &S) -> EngineResult<Self> {
        let defaults = Self::default();

        let salary = store.load_setting("salary", &defaults.monthly_salary.to_string())?;
        let monthly_salary = parse_setting("salary", &salary)?;

        let lunch = store.load_setting("lunch_min", &defaults.lunch_minutes.to_string())?;
        let lunch_minutes = parse_setting("lunch_min", &lunch)?;

        let multiplier = store.load_setting(
            "overtime_multiplier",
            &defaults.overtime_multiplier.to_string(),
        )?;
        let overtime_multiplier = parse_setting("overtime_multiplier", &multiplier)?;

        Ok(Self {
            monthly_salary,
            lunch_minutes,
            overtime_multiplier,
        })
    }
}

fn parse_setting<T: FromStr>(key: &str, value: &str) -> EngineResult<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| EngineError::ConfigParse {
        path: format!("setting '{key}'"),
        message: format!("{e}"),
    })
}
