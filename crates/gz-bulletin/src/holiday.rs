//! `Holiday` — an externally registered non-working day.
//!
//! Holidays are owned by an external registry; this module only validates
//! candidate values before they are handed back for storage. To keep the
//! numbering and streak calculations consistent, a holiday may not fall on a
//! Saturday, a Sunday, or a fixed no-publication date: those days are
//! already non-working (or bulletin-free) by the structural rules.

use gz_core::errors::{Error, Result};
use gz_time::publication::is_no_publication_date;
use gz_time::Date;

/// Return `true` if `date` is admissible as a holiday designation.
///
/// The null date, Saturdays, Sundays, and the fixed no-publication dates are
/// all inadmissible.
pub fn is_valid_holiday_date(date: Date) -> bool {
    if date.is_null() {
        return false;
    }
    if date.weekday().is_weekend() {
        return false;
    }
    !is_no_publication_date(date)
}

/// A registered holiday: a non-working weekday on which a bulletin is still
/// published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    date: Date,
    description: String,
}

impl Holiday {
    /// Create a holiday, validating the date and the description.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHolidayDate`] if the date is inadmissible (see
    /// [`is_valid_holiday_date`]) and [`Error::InvalidDescription`] if the
    /// description is empty or blank. This constructor is the sole gate for
    /// those invariants; the external registry enforces date uniqueness.
    pub fn new(date: Date, description: impl Into<String>) -> Result<Self> {
        if !is_valid_holiday_date(date) {
            return Err(Error::InvalidHolidayDate(format!(
                "{date} cannot be designated a holiday"
            )));
        }
        let description = description.into();
        if description.trim().is_empty() {
            return Err(Error::InvalidDescription(
                "a holiday requires a non-blank description".into(),
            ));
        }
        Ok(Self { date, description })
    }

    /// The date of the holiday.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The description of the holiday.
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn rejects_structurally_excluded_dates() {
        assert!(!is_valid_holiday_date(date(2021, 1, 9))); // Saturday
        assert!(!is_valid_holiday_date(date(2021, 1, 10))); // Sunday
        assert!(!is_valid_holiday_date(date(2021, 1, 1))); // New Year's Day
        assert!(!is_valid_holiday_date(date(2020, 12, 25))); // Christmas Day
        assert!(!is_valid_holiday_date(date(2021, 4, 2))); // Good Friday
        assert!(!is_valid_holiday_date(Date::NULL));
    }

    #[test]
    fn accepts_ordinary_weekdays() {
        assert!(is_valid_holiday_date(date(2021, 1, 12))); // Tuesday
        assert!(is_valid_holiday_date(date(2021, 5, 3))); // Monday
    }

    #[test]
    fn constructor_validates_date() {
        let err = Holiday::new(date(2021, 1, 9), "Saturday outing").unwrap_err();
        assert!(matches!(err, Error::InvalidHolidayDate(_)));
    }

    #[test]
    fn constructor_validates_description() {
        let err = Holiday::new(date(2021, 1, 12), "").unwrap_err();
        assert!(matches!(err, Error::InvalidDescription(_)));
        let err = Holiday::new(date(2021, 1, 12), "   ").unwrap_err();
        assert!(matches!(err, Error::InvalidDescription(_)));
    }

    #[test]
    fn constructs_valid_holiday() {
        let h = Holiday::new(date(2021, 5, 3), "regional holiday").unwrap();
        assert_eq!(h.date(), date(2021, 5, 3));
        assert_eq!(h.description(), "regional holiday");
    }
}
