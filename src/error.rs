//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during pay calculation,
//! configuration loading, and store access.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::TimeParse {
///     input: "9h30".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed clock time '9h30': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock time string did not match the `HH:MM` format.
    #[error("Malformed clock time '{input}': expected HH:MM")]
    TimeParse {
        /// The string that failed to parse.
        input: String,
    },

    /// A month contains no working days, so no hourly rate can be derived.
    ///
    /// Callers must suppress all pay calculations for the month and surface
    /// "no rate available" rather than crash.
    #[error("No working days in {year}-{month:02}: hourly rate is undefined")]
    NoWorkingDays {
        /// The calendar year.
        year: i32,
        /// The calendar month (1-12).
        month: u32,
    },

    /// A year/month pair does not denote a valid calendar month.
    #[error("Invalid calendar month {year}-{month}")]
    InvalidMonth {
        /// The calendar year.
        year: i32,
        /// The out-of-range month value.
        month: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The profile store could not be read or written.
    #[error("Store error at '{path}': {message}")]
    Store {
        /// The path of the store file involved.
        path: String,
        /// A description of the I/O or serialization failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
