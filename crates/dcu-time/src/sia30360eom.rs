//! SIA 30/360 day count with end-of-month adjustments.
//!
//! Each year is taken to have 12 months of 30 days.  Given the earlier date
//! `(Ye, Me, De)` and the later date `(Yl, Ml, Dl)`, the day fields are
//! adjusted in this order:
//!
//! 1. If both dates are the last day of February, `Dl` becomes 30.
//! 2. If the earlier date is the last day of February, `De` becomes 30.
//! 3. If `Dl` is 31 and `De` is 30 or 31, `Dl` becomes 30.
//! 4. If `De` is 31, `De` becomes 30.
//!
//! and the day count is
//!
//! ```text
//! sign(end - begin) * ((Yl - Ye) * 360 + (Ml - Me) * 30 + Dl - De)
//! ```
//!
//! The adjustments always look at the chronologically later date, not the
//! second argument, so swapping the arguments negates the result exactly.
//!
//! Reference: *Standard Securities Calculation Methods* (1996),
//! ISBN 1-882936-01-9.
//!
//! ```
//! use dcu_time::{sia30360eom, Date};
//!
//! let d1 = Date::from_ymd(2004, 9, 30).unwrap();
//! let d2 = Date::from_ymd(2004, 12, 31).unwrap();
//! assert_eq!(sia30360eom::days_diff(&d1, &d2), 90);
//! assert_eq!(sia30360eom::years_diff(&d1, &d2), 0.25);
//! ```

use crate::calendar_date::CalendarDate;
use crate::date::Date;
use crate::day_counter::DayCounter;
use dcu_core::{trace, Integer, Real, Time};

/// Days in a convention year.
const DAYS_PER_YEAR: Integer = 360;

/// Days in a convention month.
const DAYS_PER_MONTH: Integer = 30;

/// SIA 30/360 end-of-month day counter.
///
/// Stateless; the conventions are available as associated functions over any
/// [`CalendarDate`] and through the [`DayCounter`] trait for [`Date`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sia30360Eom;

impl Sia30360Eom {
    /// Number of days between `begin` and `end` under SIA 30/360 eom.
    ///
    /// Non-negative when `begin <= end`; swapping the arguments negates the
    /// result.
    pub fn days_diff<D: CalendarDate>(begin: &D, end: &D) -> Integer {
        let (earlier, later, sign) = if begin <= end {
            (begin, end, 1)
        } else {
            (end, begin, -1)
        };

        let mut de = earlier.day();
        let mut dl = later.day();

        let earlier_feb_end = earlier.is_last_day_of_february();
        if earlier_feb_end && later.is_last_day_of_february() {
            dl = 30;
        }
        if earlier_feb_end {
            de = 30;
        }
        if dl == 31 && matches!(de, 30 | 31) {
            dl = 30;
        }
        if de == 31 {
            de = 30;
        }

        trace!(
            "SIA-30/360-eom: {}-{:02}-{:02} (De={de}) .. {}-{:02}-{:02} (Dl={dl})",
            earlier.year(),
            earlier.month(),
            earlier.day(),
            later.year(),
            later.month(),
            later.day(),
        );

        sign * ((later.year() - earlier.year()) * DAYS_PER_YEAR
            + (later.month() - earlier.month()) * DAYS_PER_MONTH
            + (dl - de))
    }

    /// Number of 360-day years between `begin` and `end` under SIA 30/360
    /// eom, i.e. [`days_diff`](Self::days_diff) divided by 360.
    ///
    /// `|years_diff(b, e) + years_diff(e, b)| <= 1.0e-15`.
    pub fn years_diff<D: CalendarDate>(begin: &D, end: &D) -> Time {
        Real::from(Self::days_diff(begin, end)) / Real::from(DAYS_PER_YEAR)
    }
}

/// Free-function form of [`Sia30360Eom::days_diff`].
pub fn days_diff<D: CalendarDate>(begin: &D, end: &D) -> Integer {
    Sia30360Eom::days_diff(begin, end)
}

/// Free-function form of [`Sia30360Eom::years_diff`].
pub fn years_diff<D: CalendarDate>(begin: &D, end: &D) -> Time {
    Sia30360Eom::years_diff(begin, end)
}

impl DayCounter for Sia30360Eom {
    fn name(&self) -> &str {
        "SIA-30/360-eom"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        i64::from(Self::days_diff(&d1, &d2))
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        Self::years_diff(&d1, &d2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn quarter() {
        let (d1, d2) = (date(2004, 9, 30), date(2004, 12, 31));
        assert_eq!(Sia30360Eom::days_diff(&d1, &d2), 90);
        assert_eq!(Sia30360Eom::years_diff(&d1, &d2), 0.25);
        assert_eq!(Sia30360Eom::days_diff(&d2, &d1), -90);
    }

    #[test]
    fn end_of_february_to_end_of_march() {
        // De: 28 -> 30 (last day of Feb), then Dl: 31 -> 30.
        assert_eq!(
            Sia30360Eom::days_diff(&date(2003, 2, 28), &date(2003, 3, 31)),
            30
        );
        // 28 February is not the last day of February in a leap year.
        assert_eq!(
            Sia30360Eom::days_diff(&date(2004, 2, 28), &date(2004, 3, 31)),
            33
        );
    }

    #[test]
    fn both_last_day_of_february() {
        assert_eq!(
            Sia30360Eom::days_diff(&date(2004, 2, 29), &date(2005, 2, 28)),
            360
        );
        assert_eq!(
            Sia30360Eom::days_diff(&date(2005, 2, 28), &date(2004, 2, 29)),
            -360
        );
        assert_eq!(
            Sia30360Eom::days_diff(&date(2004, 2, 29), &date(2004, 2, 29)),
            0
        );
    }

    #[test]
    fn adjusts_later_date_not_second_argument() {
        let (d1, d2) = (date(2004, 1, 31), date(2004, 2, 29));
        assert_eq!(Sia30360Eom::days_diff(&d1, &d2), 29);
        assert_eq!(Sia30360Eom::days_diff(&d2, &d1), -29);
    }

    #[test]
    fn day_counter_trait() {
        let dc = Sia30360Eom;
        let (d1, d2) = (date(2004, 9, 30), date(2004, 12, 31));
        assert_eq!(dc.name(), "SIA-30/360-eom");
        assert_eq!(dc.day_count(d1, d2), 90);
        assert_eq!(dc.year_fraction(d1, d2), 0.25);
        assert_eq!(dc.year_fraction_with_ref(d1, d2, d1, d2), 0.25);
    }
}
