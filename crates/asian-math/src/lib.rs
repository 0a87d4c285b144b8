//! # asian-math
//!
//! Mathematical utilities: the standard normal distribution (via statrs),
//! a seedable Mersenne Twister generator usable through the `rand` traits,
//! and a sample statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::normal_cdf;
pub use random_numbers::{fill_standard_normals, MersenneTwisterRng};
pub use statistics::Statistics;
