//! `ExtraordinaryEdition` — supplementary bulletin issues on a date.
//!
//! An extraordinary edition record counts additional issues published on a
//! single date, normally one, rarely more. Records are owned by an external
//! registry (at most one per date); the core only validates candidates and
//! reads them as input collections.

use gz_core::ensure;
use gz_core::errors::Result;
use gz_time::Date;

/// The number of supplementary bulletin issues published on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraordinaryEdition {
    date: Date,
    count: i32,
}

impl ExtraordinaryEdition {
    /// Create a record of `count` extraordinary issues on `date`.
    ///
    /// Requires `count >= 1`: a record only exists because at least one
    /// extraordinary issue was published. Use [`with_explicit_zero`] for the
    /// relaxed rule.
    ///
    /// [`with_explicit_zero`]: ExtraordinaryEdition::with_explicit_zero
    pub fn new(date: Date, count: i32) -> Result<Self> {
        ensure!(!date.is_null(), "an extraordinary edition requires a date");
        ensure!(
            count > 0,
            "extraordinary edition count must be positive, got {count}"
        );
        Ok(Self { date, count })
    }

    /// Create a record that may carry an explicit zero, meaning "no
    /// extraordinary editions on this date, recorded deliberately".
    ///
    /// Negative counts are rejected either way.
    pub fn with_explicit_zero(date: Date, count: i32) -> Result<Self> {
        ensure!(!date.is_null(), "an extraordinary edition requires a date");
        ensure!(
            count >= 0,
            "extraordinary edition count must not be negative, got {count}"
        );
        Ok(Self { date, count })
    }

    /// The date of publication.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The number of extraordinary issues on that date.
    pub fn count(&self) -> i32 {
        self.count
    }
}
