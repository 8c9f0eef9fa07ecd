//! Shift duration calculation.
//!
//! This module turns a pair of wall-clock `HH:MM` strings into worked
//! minutes. Shifts that end before they start are treated as crossing
//! midnight.

use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Minutes in a day, added to the end time of a midnight-crossing shift.
const MINUTES_PER_DAY: u32 = 1440;

/// Parses a 24-hour `HH:MM` clock string into minutes since midnight.
///
/// # Arguments
///
/// * `input` - A wall-clock time such as `"09:00"` or `"22:15"`
///
/// # Returns
///
/// Minutes since midnight (0..=1439), or [`EngineError::TimeParse`] for
/// anything that is not a valid `HH:MM` time.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::parse_clock_time;
///
/// assert_eq!(parse_clock_time("09:30").unwrap(), 570);
/// assert_eq!(parse_clock_time("00:00").unwrap(), 0);
/// assert!(parse_clock_time("24:00").is_err());
/// assert!(parse_clock_time("9h30").is_err());
/// ```
pub fn parse_clock_time(input: &str) -> EngineResult<u32> {
    let (hours, minutes) = input.split_once(':').ok_or_else(|| EngineError::TimeParse {
        input: input.to_string(),
    })?;

    let parse_component = |s: &str| -> EngineResult<u32> {
        // Reject signs, whitespace, and empty components that u32::from_str
        // would otherwise tolerate or misreport.
        if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EngineError::TimeParse {
                input: input.to_string(),
            });
        }
        s.parse().map_err(|_| EngineError::TimeParse {
            input: input.to_string(),
        })
    };

    let hours = parse_component(hours)?;
    let minutes = parse_component(minutes)?;

    if hours > 23 || minutes > 59 {
        return Err(EngineError::TimeParse {
            input: input.to_string(),
        });
    }

    Ok(hours * 60 + minutes)
}

/// Calculates worked minutes between an activation and an end time.
///
/// Both times are interpreted on the same calendar day; if the end time is
/// earlier than the activation time, the shift crosses midnight and 24
/// hours are added to the end before subtracting. If either time is
/// absent, the duration is 0.
///
/// # Errors
///
/// Returns [`EngineError::TimeParse`] when a present time string is
/// malformed. Callers that prefer the historical degrade-to-zero behavior
/// should use [`duration_or_zero`].
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_duration;
///
/// // Ordinary same-day shift.
/// assert_eq!(calculate_duration(Some("09:00"), Some("18:00")).unwrap(), 540);
/// // Midnight crossing.
/// assert_eq!(calculate_duration(Some("22:00"), Some("06:00")).unwrap(), 480);
/// // Absent endpoint.
/// assert_eq!(calculate_duration(Some("09:00"), None).unwrap(), 0);
/// ```
pub fn calculate_duration(activation: Option<&str>, end: Option<&str>) -> EngineResult<u32> {
    let (Some(activation), Some(end)) = (activation, end) else {
        return Ok(0);
    };

    let start_min = parse_clock_time(activation)?;
    let mut end_min = parse_clock_time(end)?;

    if end_min < start_min {
        end_min += MINUTES_PER_DAY;
    }

    Ok(end_min - start_min)
}

/// The lenient duration default: malformed times degrade to 0 minutes.
///
/// A save is never failed over a bad time string; the parse failure is
/// logged instead. Use [`calculate_duration`] to surface the error.
pub fn duration_or_zero(activation: Option<&str>, end: Option<&str>) -> u32 {
    match calculate_duration(activation, end) {
        Ok(minutes) => minutes,
        Err(e) => {
            warn!(error = %e, "unparseable shift time, recording zero duration");
            0
        }
    }
}
