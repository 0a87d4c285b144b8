//! Error types for asian-rs.
//!
//! Every failure the pricing engines can report is detected before the
//! stepping or simulation loop starts, so a single `thiserror`-derived enum
//! covers the whole library. The `ensure!` and `fail!` macros keep the
//! validation code short.

use crate::Real;
use thiserror::Error;

/// The top-level error type used throughout asian-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A contract or configuration value is outside its admissible range
    /// (non-positive price, strike, volatility or maturity, non-finite
    /// input, or a partition / path count below its minimum).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The finite-difference lookup target lies outside the truncated
    /// spatial domain, so no grid interval brackets it.
    #[error(
        "spatial domain too narrow: lookup target {target} outside [{lower}, {upper}]; \
         increase spatial_size"
    )]
    DomainTooNarrow {
        /// The transformed coordinate the price is read at.
        target: Real,
        /// Lowest spatial node.
        lower: Real,
        /// Highest spatial node.
        upper: Real,
    },

    /// Unexpected numerical failure (e.g. a non-finite result).
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout asian-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use asian_core::ensure;
/// fn positive(x: f64) -> asian_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use asian_core::fail;
/// fn always_err() -> asian_core::Result<()> {
///     fail!("solver produced {}", f64::NAN);
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
