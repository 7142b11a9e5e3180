// Without the `logging` feature the macros still type-check their arguments
// so that values computed only for a log record don't trip `unused` lints.

/// Emit a `log::trace!` record when the `logging` feature is enabled.
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! trace {
    ($($tt:tt)*) => { $crate::__log::trace!($($tt)*) }
}

/// Emit a `log::trace!` record when the `logging` feature is enabled.
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! trace {
    ($($tt:tt)*) => {
        if false {
            let _ = ::std::format!($($tt)*);
        }
    };
}

/// Emit a `log::debug!` record when the `logging` feature is enabled.
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! debug {
    ($($tt:tt)*) => { $crate::__log::debug!($($tt)*) }
}

/// Emit a `log::debug!` record when the `logging` feature is enabled.
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! debug {
    ($($tt:tt)*) => {
        if false {
            let _ = ::std::format!($($tt)*);
        }
    };
}
