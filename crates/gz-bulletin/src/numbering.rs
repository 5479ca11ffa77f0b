//! Sequential bulletin numbering.
//!
//! Bulletins are numbered from 1 each year. Every day carries one ordinary
//! issue except Sundays and the fixed no-publication dates; extraordinary
//! editions consume numbers of their own, shifting every later issue of the
//! year.

use crate::extraordinary::ExtraordinaryEdition;
use gz_core::errors::Result;
use gz_core::BulletinNumber;
use gz_time::publication::no_publication_dates;
use gz_time::{Date, Weekday};

/// Compute the ordinal bulletin number for `date`.
///
/// `extraordinary_count` is the total number of extraordinary issues
/// published in the same year on or before `date`. The number is the
/// inclusive count of days since January 1, plus that total, minus the
/// Sundays passed and the non-Sunday no-publication dates already behind.
///
/// Negative `extraordinary_count` values are a caller-contract violation and
/// are not reported specially; validated inputs come from
/// [`ExtraordinaryEdition`].
pub fn bulletin_number(date: Date, extraordinary_count: i32) -> Result<BulletinNumber> {
    let jan_1 = Date::from_ymd(date.year(), 1, 1)?;
    let num_days = date - jan_1 + 1;

    // Sundays from Jan 1 through `date`, inclusive, from the day-of-month of
    // the year's first Sunday.
    let first_sunday = Date::nth_weekday(1, Weekday::Sunday, date.year(), 1)?;
    let num_sundays = (num_days + 7 - first_sunday.day_of_month() as i32) / 7;

    let num_no_publication = no_publication_dates(date.year())?
        .iter()
        .filter(|d| d.weekday() != Weekday::Sunday)
        .filter(|&&d| d < date)
        .count() as i32;

    Ok(num_days + extraordinary_count - num_sundays - num_no_publication)
}

/// Compute the ordinal bulletin number for `date` from the year's
/// extraordinary-edition records.
///
/// Only records dated on or before `date` are counted; later ones do not
/// affect the result.
pub fn bulletin_number_with_editions(
    date: Date,
    editions: &[ExtraordinaryEdition],
) -> Result<BulletinNumber> {
    let count = editions
        .iter()
        .filter(|e| e.date() <= date)
        .map(ExtraordinaryEdition::count)
        .sum();
    bulletin_number(date, count)
}
