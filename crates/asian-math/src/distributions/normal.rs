//! Standard normal distribution.

use asian_core::Real;
use statrs::function::erf::erfc;
use std::f64::consts::FRAC_1_SQRT_2;

/// The standard normal cumulative distribution function Φ(x).
///
/// Evaluated as `½·erfc(−x/√2)`, which keeps full relative accuracy in the
/// lower tail where `1 − Φ(−x)` would cancel.
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}
