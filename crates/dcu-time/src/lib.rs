//! # dcu-time
//!
//! Date type, the `CalendarDate` capability and the SIA 30/360 end-of-month
//! day counter.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarDate` — what a day counter needs to know about a date.
pub mod calendar_date;

/// `Date` type.
pub mod date;

/// `DayCounter` trait.
pub mod day_counter;

/// `Month` — month of the year.
pub mod month;

/// SIA 30/360 end-of-month convention.
pub mod sia30360eom;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar_date::CalendarDate;
pub use date::Date;
pub use day_counter::DayCounter;
pub use month::Month;
pub use sia30360eom::Sia30360Eom;
