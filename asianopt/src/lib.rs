//! # asianopt
//!
//! Pricing of arithmetic-average Asian options under Black-Scholes by a
//! finite-difference scheme and by control-variate Monte Carlo.
//!
//! This crate is a **façade** that re-exports the public items of the
//! `asian-*` workspace crates. Application code should depend on this crate
//! rather than on the individual crates.
//!
//! ## Quick start
//!
//! ```rust
//! use asianopt::core::{OptionContract, OptionType};
//! use asianopt::pricingengines::{compute, solve, FdsGridConfig, McConfig};
//!
//! let contract = OptionContract::new(50.0, 50.0, 0.05, 0.5, 1.0)?;
//! let fds = solve(&contract, OptionType::Call, &FdsGridConfig::default())?;
//! let mc = compute(&contract, OptionType::Call, &McConfig::new(50, 500))?;
//! assert!((fds - mc.price).abs() < 0.5);
//! # Ok::<(), asianopt::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use asian_core as core;

/// Normal distribution, random numbers, statistics.
pub use asian_math as math;

/// Numerical methods (tridiagonal solves, finite-difference stepping,
/// Monte Carlo paths).
pub use asian_methods as methods;

/// Pricing engines.
pub use asian_pricingengines as pricingengines;

pub use asian_core::{Error, OptionContract, OptionType, Result};
pub use asian_pricingengines::{
    compute, european_price, geometric_asian_price, solve, FdsGridConfig, McConfig, McEstimate,
};
