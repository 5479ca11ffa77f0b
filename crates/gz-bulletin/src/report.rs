//! Composite bulletin query.
//!
//! The service layer answers one question per issue date: which number does
//! the bulletin carry, and how many bulletins must be left approved for the
//! non-working days that follow. This module bundles both computations
//! behind a single call.

use crate::extraordinary::ExtraordinaryEdition;
use crate::holiday::Holiday;
use crate::numbering::bulletin_number_with_editions;
use crate::streak::consecutive_non_working_bulletin_days;
use gz_core::ensure;
use gz_core::errors::Result;
use gz_core::BulletinNumber;
use gz_time::Date;

/// The bulletin figures for one issue date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletinReport {
    /// Ordinal number of the bulletin within its year.
    pub number: BulletinNumber,
    /// Bulletins published on consecutive non-working days after the date.
    pub non_working_bulletins: u32,
}

/// Compute the bulletin number and the non-working streak for `date` in one
/// call.
///
/// `holidays` and `editions` are the year's records from the external
/// registry. An empty holiday list is rejected: without it the streak would
/// silently undercount.
pub fn bulletin_report(
    date: Date,
    holidays: &[Holiday],
    editions: &[ExtraordinaryEdition],
) -> Result<BulletinReport> {
    ensure!(
        !holidays.is_empty(),
        "no holidays registered for {}",
        date.year()
    );
    Ok(BulletinReport {
        number: bulletin_number_with_editions(date, editions)?,
        non_working_bulletins: consecutive_non_working_bulletin_days(date, holidays)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gz_core::errors::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holidays_2021() -> Vec<Holiday> {
        [date(2021, 5, 3), date(2021, 12, 24)]
            .into_iter()
            .map(|d| Holiday::new(d, "dummy desc").unwrap())
            .collect()
    }

    #[test]
    fn combines_number_and_streak() {
        let report = bulletin_report(date(2021, 12, 23), &holidays_2021(), &[]).unwrap();
        assert_eq!(report.number, 304);
        assert_eq!(report.non_working_bulletins, 1);
    }

    #[test]
    fn extraordinary_editions_shift_the_number() {
        let editions = [ExtraordinaryEdition::new(date(2021, 3, 20), 1).unwrap()];
        let report = bulletin_report(date(2021, 12, 23), &holidays_2021(), &editions).unwrap();
        assert_eq!(report.number, 305);
        assert_eq!(report.non_working_bulletins, 1);
    }

    #[test]
    fn rejects_an_empty_holiday_list() {
        let err = bulletin_report(date(2021, 12, 23), &[], &[]).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }
}
