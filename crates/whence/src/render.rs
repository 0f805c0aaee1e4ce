//! Long-form rendering of an instant.

use std::fmt;

use chrono::{DateTime, Datelike, TimeZone};

/// Render `instant` as e.g. `Monday, January 15th 2024, 2:00:00 AM`.
///
/// Full weekday and month names, ordinal day-of-month, four-digit year,
/// and an unpadded 12-hour clock with zero-padded minutes and seconds.
pub fn long_form<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let day = instant.day();
    format!(
        "{} {}{} {}",
        instant.format("%A, %B"),
        day,
        ordinal_suffix(day),
        instant.format("%Y, %-I:%M:%S %p"),
    )
}

/// Ordinal suffix for a day of month: 1st, 2nd, 3rd, 4th, ... 11th-13th
/// are always "th".
fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
