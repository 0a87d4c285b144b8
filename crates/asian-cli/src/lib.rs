//! # asian-cli
//!
//! Comparison drivers and output formatting behind the `asian` binary.
//!
//! - [`compare`] — parameter sweeps of the finite-difference, Monte Carlo
//!   and European engines, plus a put-call parity check
//! - [`config`] — TOML sweep description
//! - [`output`] — table / JSON / CSV rendering

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod config;
pub mod error;
pub mod output;

pub use compare::{
    check_put_call_parity, compare_methods_over_spot, compare_methods_over_volatility,
    compare_options_over_spot, compare_options_over_volatility, quote_contract, CompareSettings,
    ParityCheck, Quote, Series, SeriesSet, SweepParameter,
};
pub use config::SweepConfig;
pub use error::{CliError, Result};
pub use output::{render, OutputFormat};
