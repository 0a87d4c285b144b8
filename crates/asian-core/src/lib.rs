//! # asian-core
//!
//! Core types and error definitions for asian-rs.
//!
//! This crate provides the building blocks shared by every other crate in
//! the workspace: the numeric type aliases, the error taxonomy, the
//! [`OptionType`] enum, and the validated [`OptionContract`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Option type and contract parameters.
pub mod option;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use option::{averaging_factor, OptionContract, OptionType};
