//! Applying an offset phrase to a reference instant.
//!
//! Hour offsets are instant arithmetic. Day offsets move the civil date
//! in the reference's own zone and keep the wall-clock time, so "+1 day"
//! across a DST transition lands on the same local time rather than
//! exactly 24 hours later. The reference is never mutated; the caller
//! supplies the anchor explicitly (no system clock access here).

use chrono::{DateTime, Duration, TimeZone};

use crate::error::{Result, WhenceError};
use crate::phrase::{Direction, OffsetPhrase, Unit};

/// Shift `reference` by the offset described in `phrase`.
///
/// A magnitude of zero returns the reference instant unchanged for
/// either unit.
///
/// # Errors
///
/// Returns [`WhenceError::OutOfRange`] if the shifted instant is not
/// representable, or [`WhenceError::AmbiguousLocalTime`] if a day shift
/// lands on a wall-clock time the zone skips or repeats (DST gap/fold).
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use whence::{apply_offset, parse_phrase};
///
/// let reference = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let phrase = parse_phrase("10 hours ago").unwrap();
/// let resolved = apply_offset(&phrase, reference).unwrap();
/// assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 15, 2, 0, 0).unwrap());
/// ```
pub fn apply_offset<Tz: TimeZone>(
    phrase: &OffsetPhrase,
    reference: DateTime<Tz>,
) -> Result<DateTime<Tz>> {
    let signed = match phrase.direction {
        Direction::Past => -phrase.magnitude,
        Direction::Future => phrase.magnitude,
    };

    match phrase.unit {
        Unit::Hour => shift_hours(reference, signed),
        Unit::Day => shift_days(reference, signed),
    }
}

fn shift_hours<Tz: TimeZone>(reference: DateTime<Tz>, hours: i64) -> Result<DateTime<Tz>> {
    let delta = Duration::try_hours(hours)
        .ok_or_else(|| WhenceError::OutOfRange(format!("{hours} hours")))?;
    reference
        .checked_add_signed(delta)
        .ok_or_else(|| WhenceError::OutOfRange(format!("{hours} hours")))
}

fn shift_days<Tz: TimeZone>(reference: DateTime<Tz>, days: i64) -> Result<DateTime<Tz>> {
    let delta = Duration::try_days(days)
        .ok_or_else(|| WhenceError::OutOfRange(format!("{days} days")))?;
    let date = reference
        .date_naive()
        .checked_add_signed(delta)
        .ok_or_else(|| WhenceError::OutOfRange(format!("{days} days")))?;

    // Re-anchor the shifted civil datetime in the reference's zone.
    let naive = date.and_time(reference.time());
    reference
        .timezone()
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| {
            WhenceError::AmbiguousLocalTime(format!("{naive} after shifting {days} days"))
        })
}

// ── Tests ───────────────────────────────────────────────────────────────────
