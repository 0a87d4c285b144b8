//! # asian-methods
//!
//! Numerical methods behind the pricing engines: finite-difference grids
//! with tridiagonal theta stepping, and Monte Carlo path simulation.
//!
//! # Modules
//!
//! * [`finite_differences`] — tridiagonal operator, uniform grid, space-time
//!   value grid, split explicit/implicit step
//! * [`monte_carlo`] — GBM path batches and path pricers

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Finite difference methods: tridiagonal solver, grids, time stepping.
pub mod finite_differences;

/// Monte Carlo simulation: path generation and path pricing.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use finite_differences::{
    FdmGrid, ThetaStep, TridiagonalFactorization, TridiagonalOperator, UniformGrid,
};
pub use monte_carlo::{
    ArithmeticAsianPathPricer, GbmPathGenerator, GeometricAsianPathPricer, PathBatch,
    PathPricer,
};
