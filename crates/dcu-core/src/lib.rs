//! # dcu-core
//!
//! Core types, error definitions and logging macros for dcu.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – primitive type aliases, the error type
//! with its `ensure!` macro, and the `trace!` / `debug!` macros
//! that forward to the `log` facade when the `logging` feature is enabled.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Feature-gated `trace!` / `debug!` macros.
#[macro_use]
mod logging;

#[cfg(feature = "logging")]
#[doc(hidden)]
pub use log as __log;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for day counts and date components.
pub type Integer = i32;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
