//! `CalendarDate` — the date capability that day counters read dates through.
//!
//! A day-count convention only needs the year/month/day fields of a date, a
//! chronological ordering and, for the end-of-month rules, whether the date is
//! the last day of February.  Keeping that behind a trait means conventions
//! work equally on [`Date`] and on any other validated date type (for example
//! `chrono::NaiveDate` with the `chrono` feature).

use crate::date::Date;
use dcu_core::Integer;

/// A validated calendar date as seen by a day-count convention.
///
/// `Ord` must agree with chronological order.  Implementors guarantee that
/// `month()` is in `1..=12` and `day()` is a valid day of that month.
pub trait CalendarDate: Ord {
    /// Calendar year.
    fn year(&self) -> Integer;

    /// Month of the year, `1..=12`.
    fn month(&self) -> Integer;

    /// Day of the month, `1..=31`.
    fn day(&self) -> Integer;

    /// `true` for February 28 in a common year and February 29 in a leap
    /// year (Gregorian rule).
    fn is_last_day_of_february(&self) -> bool {
        let last = if is_gregorian_leap_year(self.year()) { 29 } else { 28 };
        self.month() == 2 && self.day() == last
    }
}

/// Gregorian leap-year rule over signed years.
pub(crate) fn is_gregorian_leap_year(year: Integer) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl CalendarDate for Date {
    fn year(&self) -> Integer {
        Integer::from(Date::year(self))
    }

    fn month(&self) -> Integer {
        Integer::from(Date::month(self))
    }

    fn day(&self) -> Integer {
        Integer::from(self.day_of_month())
    }

    fn is_last_day_of_february(&self) -> bool {
        Date::is_last_day_of_february(*self)
    }
}

#[cfg(feature = "chrono")]
impl CalendarDate for chrono::NaiveDate {
    fn year(&self) -> Integer {
        chrono::Datelike::year(self)
    }

    // chrono keeps month and day in 1..=12 and 1..=31, so the casts are lossless.
    fn month(&self) -> Integer {
        chrono::Datelike::month(self) as Integer
    }

    fn day(&self) -> Integer {
        chrono::Datelike::day(self) as Integer
    }
}
