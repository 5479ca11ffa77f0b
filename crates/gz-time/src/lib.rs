//! # gz-time
//!
//! The `Date` value type and the gazette's publication-calendar rules.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Publication-calendar rules: Easter Sunday and the fixed no-publication
/// dates.
pub mod publication;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use publication::{easter_sunday, good_friday, is_no_publication_date, no_publication_dates};
pub use weekday::Weekday;
