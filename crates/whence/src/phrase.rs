//! Extracting an offset phrase from free text.
//!
//! The grammar is deliberately closed: a decimal magnitude, a unit word
//! from {hour, hours, day, days}, and a direction phrase from
//! {ago, in the future}, matched case-insensitively anywhere in the
//! input. The match does not have to span the whole string — a valid
//! phrase embedded in surrounding text is accepted.
//!
//! If an input cannot be matched we return an error rather than
//! guessing. A diagnostic is emitted through `tracing`; callers must
//! rely only on the `Ok`/`Err` distinction.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Result, WhenceError};

/// Semantic unit of an offset, singular/plural collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    Hour,
    Day,
}

/// Which way the offset points from the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Past,
    Future,
}

/// A structured offset extracted from input text.
///
/// `magnitude`, `unit` and `direction` are the normalized values used
/// for computation. `unit_word` and `direction_word` hold the matched
/// text exactly as it appeared in the input (casing and singular/plural
/// preserved) so output can echo the caller's own wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetPhrase {
    /// Non-negative offset magnitude (the grammar only admits digit runs).
    pub magnitude: i64,
    /// Normalized unit.
    pub unit: Unit,
    /// Normalized direction.
    pub direction: Direction,
    /// The unit word as matched (e.g. "hours", "Day", "HOURS").
    pub unit_word: String,
    /// The direction phrase as matched (e.g. "ago", "in the future").
    pub direction_word: String,
}

/// Compiled offset-phrase pattern.
fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+)\s*(hours?|days?)\s*(ago|in the future)").unwrap()
    })
}

/// Parse an offset phrase out of `input`.
///
/// Only the first occurrence of the pattern is consumed; a magnitude of
/// zero is valid and resolves to the reference instant unchanged.
///
/// # Errors
///
/// Returns [`WhenceError::InvalidPhrase`] if no phrase matches, or if
/// the digit run does not fit in an `i64` (magnitudes that large are
/// outside the supported range).
///
/// # Examples
///
/// ```
/// use whence::{parse_phrase, Direction, Unit};
///
/// let phrase = parse_phrase("10 hours ago").unwrap();
/// assert_eq!(phrase.magnitude, 10);
/// assert_eq!(phrase.unit, Unit::Hour);
/// assert_eq!(phrase.direction, Direction::Past);
/// assert_eq!(phrase.unit_word, "hours");
/// ```
pub fn parse_phrase(input: &str) -> Result<OffsetPhrase> {
    let Some(caps) = pattern().captures(input) else {
        tracing::warn!(input, "input did not match the offset phrase grammar");
        return Err(WhenceError::InvalidPhrase(format!("'{}'", input.trim())));
    };

    let magnitude: i64 = caps[1].parse().map_err(|_| {
        tracing::warn!(input, "offset magnitude does not fit in an i64");
        WhenceError::InvalidPhrase(format!("magnitude too large in '{}'", input.trim()))
    })?;

    let unit_word = caps[2].to_string();
    let direction_word = caps[3].to_string();

    Ok(OffsetPhrase {
        magnitude,
        unit: normalize_unit(&unit_word),
        direction: normalize_direction(&direction_word),
        unit_word,
        direction_word,
    })
}

/// Collapse singular/plural unit words to a semantic unit.
fn normalize_unit(word: &str) -> Unit {
    // The pattern only admits hour/hours/day/days (any casing).
    if word.to_ascii_lowercase().starts_with("hour") {
        Unit::Hour
    } else {
        Unit::Day
    }
}

/// Map a direction phrase to a semantic direction.
fn normalize_direction(word: &str) -> Direction {
    if word.eq_ignore_ascii_case("ago") {
        Direction::Past
    } else {
        Direction::Future
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
