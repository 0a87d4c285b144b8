//! `asian sweep-volatility` and `asian sweep-spot`

use super::{resolve, Comparison, SweepArgs};
use asian_cli::{
    compare_methods_over_spot, compare_methods_over_volatility, compare_options_over_spot,
    compare_options_over_volatility, render, OutputFormat, Result, SweepParameter,
};
use std::path::Path;
use tracing::info;

/// Run a sweep along `parameter`.
pub fn run(
    args: &SweepArgs,
    parameter: SweepParameter,
    config: Option<&Path>,
    format: OutputFormat,
) -> Result<String> {
    let cfg = resolve(config, &args.market, &args.engine)?;
    let base = cfg.contract()?;
    let settings = cfg.settings();

    let points = if args.values.is_empty() {
        match parameter {
            SweepParameter::Volatility => cfg.sweep.volatilities.clone(),
            SweepParameter::InitialPrice => cfg.sweep.initial_prices.clone(),
        }
    } else {
        args.values.clone()
    };
    info!(%parameter, compare = ?args.compare, points = points.len(), "sweep");

    let set = match (args.compare, parameter) {
        (Comparison::Methods, SweepParameter::Volatility) => {
            compare_methods_over_volatility(&base, &points, &settings)?
        }
        (Comparison::Methods, SweepParameter::InitialPrice) => {
            compare_methods_over_spot(&base, &points, &settings)?
        }
        (Comparison::Options, SweepParameter::Volatility) => {
            compare_options_over_volatility(&base, &points, &settings.fds)?
        }
        (Comparison::Options, SweepParameter::InitialPrice) => {
            compare_options_over_spot(&base, &points, &settings.fds)?
        }
    };
    render(&set, format)
}
