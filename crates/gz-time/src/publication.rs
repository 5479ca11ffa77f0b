//! Publication-calendar rules for the gazette.
//!
//! One ordinary bulletin is published every day of the year except Sundays
//! and three fixed dates: New Year's Day, Christmas Day, and Good Friday.
//! This module knows the three fixed dates; Sunday exclusion is an orthogonal
//! rule applied by callers, since Sundays interact differently with the
//! numbering and streak calculations.

use crate::date::Date;
use gz_core::errors::Result;
use gz_core::Year;

/// Easter Sunday month and day for `year`, per the Gauss algorithm.
///
/// All divisions are integer divisions on non-negative operands. The result
/// always falls between March 22 and April 25.
fn gauss_easter(year: Year) -> (u8, u8) {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let g = (8 * b + 13) / 25;
    let h = (19 * a + b - d - g + 15) % 30;
    let j = c / 4;
    let k = c % 4;
    let m = (a + 11 * h) / 319;
    let r = (2 * e + 2 * j - k - h + m + 32) % 7;
    let month = (h - m + r + 90) / 25;
    let day = (h - m + r + month + 19) % 32;
    (month as u8, day as u8)
}

/// Good Friday month and day for `year` (two days before Easter Sunday).
///
/// Easter Sunday is never earlier than March 22, so stepping back two days
/// crosses at most one month boundary, from early April into March.
fn gauss_good_friday(year: Year) -> (u8, u8) {
    let (em, ed) = gauss_easter(year);
    if ed > 2 {
        (em, ed - 2)
    } else {
        (3, 29 + ed)
    }
}

/// Compute the date of Easter Sunday for `year`.
///
/// Uses the Gauss algorithm, exact for every Gregorian year. The only error
/// path is a year outside the supported [`Date`] range (1900–2199); the
/// algorithm itself is valid from 1583 onwards.
pub fn easter_sunday(year: Year) -> Result<Date> {
    let (month, day) = gauss_easter(year);
    Date::from_ymd(year, month, day)
}

/// Compute the date of Good Friday for `year`.
pub fn good_friday(year: Year) -> Result<Date> {
    let (month, day) = gauss_good_friday(year);
    Date::from_ymd(year, month, day)
}

/// The three dates of `year` on which no ordinary bulletin is published:
/// January 1, Good Friday, and December 25.
///
/// The three are distinct for every year; Good Friday never falls outside
/// March or April. Sundays are not part of this set.
pub fn no_publication_dates(year: Year) -> Result<[Date; 3]> {
    Ok([
        Date::from_ymd(year, 1, 1)?,
        good_friday(year)?,
        Date::from_ymd(year, 12, 25)?,
    ])
}

/// Return `true` if `date` is one of the fixed no-publication dates of its
/// year.
///
/// Sundays are NOT no-publication dates in this sense; callers that need to
/// exclude them apply that rule separately.
pub fn is_no_publication_date(date: Date) -> bool {
    let m = date.month();
    let d = date.day_of_month();
    if (d == 1 && m == 1) || (d == 25 && m == 12) {
        return true;
    }
    (m, d) == gauss_good_friday(date.year())
}
