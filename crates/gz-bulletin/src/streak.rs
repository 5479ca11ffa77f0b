//! Consecutive non-working bulletin days.
//!
//! Bulletins due on non-working days are prepared ahead on the last working
//! day and left approved for publication. The editor therefore needs to
//! know, for a given date, how many of the immediately following days are
//! non-working yet still carry a bulletin.

use crate::holiday::Holiday;
use gz_core::errors::Result;
use gz_time::publication::is_no_publication_date;
use gz_time::{Date, Weekday};

/// Count the bulletins published on consecutive non-working days
/// immediately after `date`.
///
/// Starting the day after `date`: Saturdays and registered holidays are
/// non-working but bulletin-bearing, so they count; Sundays and the fixed
/// no-publication dates carry no bulletin and are skipped without counting;
/// the first ordinary working weekday ends the run.
///
/// For example, on a working Friday before a holiday Monday the result is 2:
/// Saturday and Monday each carry a bulletin, Sunday has none, and work
/// resumes on Tuesday.
///
/// `holidays` must cover every year the run touches. A run crossing into
/// January is only counted correctly if the following year's holidays are
/// included as well; with a single-year list the streak stops early at the
/// first unregistered January weekday.
pub fn consecutive_non_working_bulletin_days(date: Date, holidays: &[Holiday]) -> Result<u32> {
    let mut streak = 0;
    let mut day = date.add_days(1)?;
    loop {
        if !is_no_publication_date(day) {
            if day.weekday() == Weekday::Saturday || is_holiday(day, holidays) {
                streak += 1;
            } else if day.weekday() != Weekday::Sunday {
                return Ok(streak);
            }
        }
        day = day.add_days(1)?;
    }
}

fn is_holiday(date: Date, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|h| h.date() == date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holidays_2021() -> Vec<Holiday> {
        [
            date(2021, 8, 6),
            date(2021, 12, 24),
            date(2021, 5, 3),
            date(2021, 6, 18),
            date(2021, 6, 21),
        ]
        .into_iter()
        .map(|d| Holiday::new(d, "dummy desc").unwrap())
        .collect()
    }

    #[test]
    fn zero_before_an_ordinary_working_day() {
        // 2021-08-05 (Thursday) is a plain working day
        assert_eq!(
            consecutive_non_working_bulletin_days(date(2021, 8, 4), &holidays_2021()).unwrap(),
            0
        );
        assert_eq!(
            consecutive_non_working_bulletin_days(date(2021, 8, 17), &holidays_2021()).unwrap(),
            0
        );
    }

    #[test]
    fn holiday_then_christmas_then_sunday() {
        // Fri 24th is a holiday (1); Sat 25th is Christmas, skipped; Sun 26th
        // skipped; work resumes Mon 27th.
        assert_eq!(
            consecutive_non_working_bulletin_days(date(2021, 12, 23), &holidays_2021()).unwrap(),
            1
        );
    }

    #[test]
    fn saturday_then_holiday_monday() {
        // Sat May 1 (1), Sun skipped, holiday Mon May 3 (2), Tue working.
        assert_eq!(
            consecutive_non_working_bulletin_days(date(2021, 4, 30), &holidays_2021()).unwrap(),
            2
        );
    }

    #[test]
    fn holiday_bridge_over_a_weekend() {
        // Holiday Fri Jun 18 (1), Sat 19 (2), Sun skipped, holiday Mon 21
        // (3), Tue working.
        assert_eq!(
            consecutive_non_working_bulletin_days(date(2021, 6, 17), &holidays_2021()).unwrap(),
            3
        );
    }

    #[test]
    fn run_into_the_next_year_with_one_year_of_holidays() {
        // Sat Dec 24 2022 (1), Christmas Sunday skipped, Mon 26 working:
        // holidays from another year do not leak in.
        assert_eq!(
            consecutive_non_working_bulletin_days(date(2022, 12, 23), &holidays_2021()).unwrap(),
            1
        );
    }

    #[test]
    fn empty_holiday_list_counts_weekends_only() {
        // Fri 2021-01-15: Sat 16 (1), Sun skipped, Mon 18 working.
        assert_eq!(
            consecutive_non_working_bulletin_days(date(2021, 1, 15), &[]).unwrap(),
            1
        );
    }
}
