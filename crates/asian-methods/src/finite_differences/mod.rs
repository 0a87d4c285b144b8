//! Finite difference building blocks.
//!
//! # Overview
//!
//! * [`TridiagonalOperator`] — tridiagonal matrix with Thomas-algorithm solver
//! * [`UniformGrid`] — uniform spatial / temporal mesh with interval lookup
//! * [`FdmGrid`] — row-per-time-layer value grid
//! * [`ThetaStep`] — split explicit/implicit step on interior nodes

mod grid;
mod step;
mod tridiagonal;

pub use grid::{FdmGrid, UniformGrid};
pub use step::ThetaStep;
pub use tridiagonal::{TridiagonalFactorization, TridiagonalOperator};
