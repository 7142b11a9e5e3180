//! `DayCounter` trait: an object-safe day-count convention over [`Date`].
//!
//! A day counter computes the **day count** and the **year fraction**
//! between two dates, used when accruing interest or discounting.

use crate::date::Date;
use dcu_core::Time;

/// A convention for counting days and the fraction of a year between two
/// dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"SIA-30/360-eom"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;

    /// Fraction of a year between `d1` and `d2` with reference period hints.
    ///
    /// Conventions that don't use a reference period ignore it; defaults to
    /// [`year_fraction`][Self::year_fraction].
    fn year_fraction_with_ref(
        &self,
        d1: Date,
        d2: Date,
        _ref_start: Date,
        _ref_end: Date,
    ) -> Time {
        self.year_fraction(d1, d2)
    }
}
