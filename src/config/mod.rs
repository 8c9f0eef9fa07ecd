//! Configuration for the payroll engine.
//!
//! Two concerns live here: the explicit [`EngineSettings`] struct that is
//! passed into every calculation call (salary, lunch break, overtime
//! premium), and loading of the year-keyed holiday calendar resources.

mod loader;
mod types;

pub use loader::load_holidays;
pub use types::{DEFAULT_OVERTIME_MULTIPLIER, EngineSettings, STANDARD_DAY_MINUTES};
