//! The phrase → instant → sentence pipeline.
//!
//! [`describe`] takes an explicit reference instant so it stays
//! deterministic and testable; [`describe_now`] anchors at the current
//! local time for callers who want the conventional default.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

use crate::error::Result;
use crate::phrase::parse_phrase;
use crate::render::long_form;
use crate::shift::apply_offset;

/// Fixed response for input that does not match the phrase grammar.
pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Resolve `input` against `reference` and compose the result sentence.
///
/// The sentence echoes the unit and direction words exactly as they
/// were matched in the input — `"10 HOURS AGO"` comes back as
/// `"10 HOURS AGO was ..."` — while the computation uses the normalized
/// phrase.
///
/// Input that does not match the grammar is recovered locally: the
/// result is `Ok` with [`INVALID_INPUT`], and nothing else runs.
///
/// # Errors
///
/// Propagates resolver failures ([`crate::WhenceError::OutOfRange`],
/// [`crate::WhenceError::AmbiguousLocalTime`]). These are not user
/// input errors and are never folded into [`INVALID_INPUT`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use whence::describe;
///
/// let reference = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// assert_eq!(
///     describe("10 hours ago", reference).unwrap(),
///     "10 hours ago was Monday, January 15th 2024, 2:00:00 AM",
/// );
/// ```
pub fn describe<Tz: TimeZone>(input: &str, reference: DateTime<Tz>) -> Result<String>
where
    Tz::Offset: fmt::Display,
{
    let phrase = match parse_phrase(input) {
        Ok(phrase) => phrase,
        Err(_) => return Ok(INVALID_INPUT.to_string()),
    };

    let resolved = apply_offset(&phrase, reference)?;
    Ok(format!(
        "{} {} {} was {}",
        phrase.magnitude,
        phrase.unit_word,
        phrase.direction_word,
        long_form(&resolved),
    ))
}

/// [`describe`] anchored at the current local time.
pub fn describe_now(input: &str) -> Result<String> {
    describe(input, Local::now())
}

// ── Tests ───────────────────────────────────────────────────────────────────
