//! `Date` type: a validated calendar date stored as a serial day number.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900.
//! * The valid date range is 1900-01-01 to 2199-12-31.
//! * 1900 is *not* a leap year (plain Gregorian rule).

use crate::calendar_date::is_gregorian_leap_year;
use crate::month::Month;
use dcu_core::debug;
use dcu_core::ensure;
use dcu_core::errors::{Error, Result};
use dcu_core::Integer;

/// First representable year.
const MIN_YEAR: u16 = 1900;

/// Last representable year.
const MAX_YEAR: u16 = 2199;

/// A calendar date represented as a serial number.
///
/// Ordering, equality and hashing follow the serial number, so they agree
/// with chronological order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number in `[Date::MIN, Date::MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "serial {serial} out of range [{}, {}]",
            Self::MIN.0,
            Self::MAX.0
        );
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the year is outside `[1900, 2199]`, the
    /// month outside `[1, 12]`, or the day not valid for that month.
    ///
    /// ```
    /// use dcu_time::Date;
    /// let d = Date::from_ymd(2004, 2, 29).unwrap();
    /// assert!(d.is_last_day_of_february());
    /// assert!(Date::from_ymd(2003, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        let checked = check_ymd(year, month, day);
        if let Err(e) = &checked {
            debug!("rejected date {year}-{month:02}-{day:02}: {e}");
        }
        checked.map(|m| Date(serial_from_ymd(year, m, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1.number()
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, m.length(is_leap_year(y))))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return `true` for February 28 in a common year and February 29 in a
    /// leap year.
    pub fn is_last_day_of_february(self) -> bool {
        self.month_of_year() == Month::February && self.is_end_of_month()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .filter(|s| (Self::MIN.0..=Self::MAX.0).contains(s))
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self:?} + {n} days is out of range")))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

fn check_ymd(year: u16, month: u8, day: u8) -> Result<Month> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::Date(format!(
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        )));
    }
    let m = Month::try_from(month)?;
    let days_in = m.length(is_leap_year(year));
    if day == 0 || day > days_in {
        return Err(Error::Date(format!(
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        )));
    }
    Ok(m)
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result falls outside `[Date::MIN, Date::MAX]`.
    fn add(self, rhs: i32) -> Self {
        match self.add_days(rhs) {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result falls outside `[Date::MIN, Date::MAX]`.
    fn sub(self, rhs: i32) -> Self {
        self + rhs.saturating_neg()
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{d} {m} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{:02}-{d:02})", m.number())
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    is_gregorian_leap_year(Integer::from(year))
}

/// Number of days in a given month/year, or `None` for an invalid month.
pub fn days_in_month(year: u16, month: u8) -> Option<u8> {
    Month::from_number(month).map(|m| m.length(is_leap_year(year)))
}

/// Serial number of January 1 of `year`.
fn serial_of_new_year(year: u16) -> i32 {
    // Leap years in [1900, year); 1900 itself is not one.
    let before = i32::from(year) - 1;
    let leaps = |y: i32| y / 4 - y / 100 + y / 400;
    let leap_days = leaps(before) - leaps(i32::from(MIN_YEAR));
    (i32::from(year) - i32::from(MIN_YEAR)) * 365 + leap_days + 1
}

fn serial_from_ymd(year: u16, month: Month, day: u8) -> i32 {
    serial_of_new_year(year) + i32::from(month.days_before(is_leap_year(year))) + i32::from(day)
        - 1
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, Month, u8) {
    // Dividing by 366 never overshoots the year.
    let mut year = MIN_YEAR + ((serial - 1) / 366) as u16;
    while serial >= serial_of_new_year(year + 1) {
        year += 1;
    }
    let leap = is_leap_year(year);
    let mut remaining = serial - serial_of_new_year(year);
    let mut month = Month::January;
    loop {
        let len = i32::from(month.length(leap));
        if remaining < len {
            break;
        }
        remaining -= len;
        month = match Month::from_number(month.number() + 1) {
            Some(next) => next,
            None => break,
        };
    }
    (year, month, remaining as u8 + 1)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
