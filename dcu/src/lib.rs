//! # dcu
//!
//! Day-count conventions for fixed-income date arithmetic.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.  It currently provides the SIA 30/360 end-of-month
//! convention.
//!
//! ## Quick start
//!
//! ```rust
//! use dcu::time::{Date, Sia30360Eom};
//!
//! let begin = Date::from_ymd(2004, 9, 30)?;
//! let end = Date::from_ymd(2004, 12, 31)?;
//! assert_eq!(Sia30360Eom::days_diff(&begin, &end), 90);
//! assert_eq!(Sia30360Eom::years_diff(&begin, &end), 0.25);
//! # Ok::<(), dcu::core::Error>(())
//! ```
//!
//! ## Features
//!
//! * `chrono` — implement [`CalendarDate`](time::CalendarDate) for
//!   `chrono::NaiveDate`.
//! * `logging` — emit `log` records from the day counters.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use dcu_core as core;

/// Date type, `CalendarDate` and day counters.
pub use dcu_time as time;

pub use dcu_core::{Error, Result};
pub use dcu_time::{sia30360eom, CalendarDate, Date, DayCounter, Month, Sia30360Eom};
