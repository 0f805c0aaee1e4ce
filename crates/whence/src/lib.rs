//! # whence
//!
//! Deterministic resolution of relative time phrases.
//!
//! Parses a constrained phrase like `"10 hours ago"` or
//! `"2 days in the future"`, applies the offset to a caller-supplied
//! reference instant, and renders the result in long form
//! (`Monday, January 15th 2024, 2:00:00 AM`).
//!
//! All functions take explicit inputs — the caller provides the
//! reference anchor, keeping the pipeline pure and testable. Only
//! [`describe_now`] reads the system clock.
//!
//! ## Modules
//!
//! - [`phrase`] — input text → structured [`OffsetPhrase`]
//! - [`shift`] — offset + reference instant → resolved instant
//! - [`render`] — instant → long-form display string
//! - [`mod@describe`] — the composed pipeline with the fixed failure string
//! - [`error`] — error types

pub mod describe;
pub mod error;
pub mod phrase;
pub mod render;
pub mod shift;

pub use describe::{describe, describe_now, INVALID_INPUT};
pub use error::{Result, WhenceError};
pub use phrase::{parse_phrase, Direction, OffsetPhrase, Unit};
pub use render::long_form;
pub use shift::apply_offset;
