//! Sleep-duration calculation from bed and wake clock times.
//!
//! Durations are derived from two HH:MM times on a 24-hour clock. A
//! non-positive raw difference means the session crossed midnight and
//! gets 24 hours added. The calculation assumes at most one day elapses
//! between bed and wake; a 25-hour sleep is indistinguishable from a
//! 1-hour one. That is an inherent precision limit of clock-time input,
//! not something this module tries to detect.

use chrono::{NaiveTime, Timelike};

use crate::error::{EvaluationError, Result, TimeField};

/// Upper bound of the plausible sleep-duration window, in hours.
pub const MAX_PLAUSIBLE_SLEEP_HOURS: f64 = 16.0;

/// Parse one clock input as an HH:MM time.
///
/// Accepts single-digit fields ("9:5" is 09:05); rejects missing input,
/// out-of-range fields ("25:00"), wrong field counts, and non-numeric
/// parts.
pub fn parse_clock(field: TimeField, text: Option<&str>) -> Result<NaiveTime> {
    let text = text
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(EvaluationError::MissingOrMalformedTime { field })?;

    NaiveTime::parse_from_str(text, "%H:%M")
        .map_err(|_| EvaluationError::MissingOrMalformedTime { field })
}

/// Elapsed hours between bed and wake time, as a real number.
pub fn sleep_hours(bed: NaiveTime, wake: NaiveTime) -> f64 {
    let bed = fractional_hour(bed);
    let wake = fractional_hour(wake);

    let mut hours = wake - bed;
    if hours <= 0.0 {
        hours += 24.0;
    }
    hours
}

/// Whether a computed duration lies in the plausible (0, 16] hour window.
///
/// Durations outside it are reported back to the user as an error by the
/// engine, never silently clamped.
pub fn is_plausible(hours: f64) -> bool {
    hours > 0.0 && hours <= MAX_PLAUSIBLE_SLEEP_HOURS
}

fn fractional_hour(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}
