//! # gz-bulletin
//!
//! Bulletin numbering, holiday policy, and the non-working streak
//! calculation for the gazette.
//!
//! All functions are pure and synchronous over immutable inputs; holiday and
//! extraordinary-edition collections come from an external registry and are
//! passed in explicitly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ExtraordinaryEdition` — supplementary issues on a date.
pub mod extraordinary;

/// `Holiday` and the holiday-designation policy.
pub mod holiday;

/// Sequential bulletin numbering.
pub mod numbering;

/// Composite per-date bulletin query.
pub mod report;

/// Consecutive non-working bulletin days.
pub mod streak;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use extraordinary::ExtraordinaryEdition;
pub use holiday::{is_valid_holiday_date, Holiday};
pub use numbering::{bulletin_number, bulletin_number_with_editions};
pub use report::{bulletin_report, BulletinReport};
pub use streak::consecutive_non_working_bulletin_days;
