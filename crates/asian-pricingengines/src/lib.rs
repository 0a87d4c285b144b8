//! # asian-pricingengines
//!
//! Pricing engines for average-price options under Black-Scholes.
//!
//! ## Engines
//!
//! - [`solve`] — finite-difference scheme on the reduced one-dimensional
//!   Asian PDE
//! - [`compute`] — Monte Carlo with the geometric-average option as control
//!   variate
//! - [`european_price`] — Black-Scholes closed form for European options
//! - [`geometric_asian_price`] — closed form for the continuously averaged
//!   geometric Asian option
//!
//! Every engine is a free function of an [`OptionContract`](asian_core::OptionContract),
//! an [`OptionType`](asian_core::OptionType) and a plain configuration
//! value. Engines hold no state between calls and never log.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod analytic_geometric_asian_engine;
pub mod fd_asian_engine;
pub mod mc_asian_engine;

pub use analytic_european_engine::{black_scholes, european_price};
pub use analytic_geometric_asian_engine::geometric_asian_price;
pub use fd_asian_engine::{solve, solve_with_grid, FdsGridConfig, FdsSolution, TerminalLookup};
pub use mc_asian_engine::{compute, compute_with_rng, McConfig, McEstimate};
