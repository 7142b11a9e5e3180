//! Error types for dcu.
//!
//! Day counting itself is total and never fails; errors only arise when a
//! date collaborator is constructed from out-of-range components.  The
//! `ensure!` macro builds the `Precondition` variant.

use thiserror::Error;

/// The top-level error type used throughout dcu.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error: invalid components or out-of-range arithmetic.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout dcu.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dcu_core::{ensure, errors::Error};
/// fn month(m: u8) -> dcu_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(2).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
