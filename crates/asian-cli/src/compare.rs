//! Parameter sweeps comparing the Asian engines with each other and with
//! the European closed form.
//!
//! Sweep points are priced in parallel with `rayon`. Each point owns its
//! contract and, for Monte Carlo, a generator seeded from the base seed and
//! the point index, so the output does not depend on thread scheduling.

use crate::error::{CliError, Result};
use asian_core::{averaging_factor, Error, OptionContract, OptionType, Price, Real};
use asian_pricingengines::{compute, european_price, solve, FdsGridConfig, McConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Series key of the finite-difference call price.
pub const FDS_CALL: &str = "FDS call";
/// Series key of the finite-difference put price.
pub const FDS_PUT: &str = "FDS put";
/// Series key of the Monte Carlo call price.
pub const CVMC_CALL: &str = "CVMC call";
/// Series key of the Monte Carlo put price.
pub const CVMC_PUT: &str = "CVMC put";
/// Series key of the Monte Carlo call confidence half-width.
pub const CVMC_CALL_CONF95: &str = "CVMC call conf95";
/// Series key of the Monte Carlo put confidence half-width.
pub const CVMC_PUT_CONF95: &str = "CVMC put conf95";
/// Series key of the Asian (finite-difference) call price.
pub const ASIAN_CALL: &str = "Asian call";
/// Series key of the Asian (finite-difference) put price.
pub const ASIAN_PUT: &str = "Asian put";
/// Series key of the European call price.
pub const EUROPEAN_CALL: &str = "European call";
/// Series key of the European put price.
pub const EUROPEAN_PUT: &str = "European put";

const METHOD_SERIES: [&str; 6] = [
    FDS_CALL,
    FDS_PUT,
    CVMC_CALL,
    CVMC_PUT,
    CVMC_CALL_CONF95,
    CVMC_PUT_CONF95,
];
const OPTION_SERIES: [&str; 4] = [ASIAN_CALL, ASIAN_PUT, EUROPEAN_CALL, EUROPEAN_PUT];

// ─── Sweep axis ───────────────────────────────────────────────────────────────

/// The contract parameter varied along a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    /// Black-Scholes volatility σ.
    Volatility,
    /// Spot price S₀.
    InitialPrice,
}

impl SweepParameter {
    /// Copy of `base` with this parameter set to `value`.
    pub fn apply(self, base: &OptionContract, value: Real) -> asian_core::Result<OptionContract> {
        match self {
            SweepParameter::Volatility => base.with_volatility(value),
            SweepParameter::InitialPrice => base.with_initial_price(value),
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepParameter::Volatility => write!(f, "volatility"),
            SweepParameter::InitialPrice => write!(f, "initial_price"),
        }
    }
}

// ─── Results ──────────────────────────────────────────────────────────────────

/// One named series of a sweep; `None` marks a point the engine could not
/// price (lookup target outside the finite-difference domain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Series key, e.g. `"FDS call"`.
    pub name: String,
    /// One value per sweep point.
    pub values: Vec<Option<Real>>,
}

/// The result of a sweep: the parameter axis and its series, in a fixed
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    /// The varied parameter.
    pub parameter: SweepParameter,
    /// Parameter values, one per point.
    pub points: Vec<Real>,
    /// Named series aligned with `points`.
    pub series: Vec<Series>,
}

impl SeriesSet {
    /// Values of the series called `name`.
    pub fn get(&self, name: &str) -> Option<&[Option<Real>]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    /// Series keys in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().map(|s| s.name.as_str())
    }
}

/// Engine settings shared by every point of a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompareSettings {
    /// Finite-difference grid.
    pub fds: FdsGridConfig,
    /// Monte Carlo size; its seed is the base of the per-point seeds.
    pub mc: McConfig,
}

/// Seed of sweep point `index`, mixed from `base` with SplitMix64.
pub fn point_seed(base: u64, index: usize) -> u64 {
    let offset = (index as u64).wrapping_add(1);
    let mut z = base.wrapping_add(offset.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ─── Drivers ──────────────────────────────────────────────────────────────────

/// Axis values whose contract the finite-difference domain does not cover
/// (see [`FdsGridConfig::covers`]); logs one warning when there are any.
pub fn uncovered_points(
    parameter: SweepParameter,
    base: &OptionContract,
    points: &[Real],
    fds: &FdsGridConfig,
) -> Vec<Real> {
    let uncovered: Vec<Real> = points
        .iter()
        .copied()
        .filter(|&v| parameter.apply(base, v).is_ok_and(|c| !fds.covers(&c)))
        .collect();
    if let Some(&first) = uncovered.first() {
        warn!(
            %parameter,
            first,
            count = uncovered.len(),
            spatial_size = fds.spatial_size,
            "volatility·√maturity exceeds half the finite-difference domain; \
             prices there are truncated, widen --spatial-size"
        );
    }
    uncovered
}

fn warn_if_uncovered(contract: &OptionContract, fds: &FdsGridConfig) {
    if !fds.covers(contract) {
        warn!(
            volatility = contract.volatility(),
            maturity = contract.time_to_maturity(),
            spatial_size = fds.spatial_size,
            "volatility·√maturity exceeds half the finite-difference domain; \
             the price is truncated, widen --spatial-size"
        );
    }
}

fn fds_or_gap(
    contract: &OptionContract,
    option_type: OptionType,
    config: &FdsGridConfig,
) -> Result<Option<Price>> {
    match solve(contract, option_type, config) {
        Ok(price) => Ok(Some(price)),
        Err(Error::DomainTooNarrow {
            target,
            lower,
            upper,
        }) => {
            warn!(
                %option_type,
                spot = contract.initial_price(),
                lookup_target = target,
                lower,
                upper,
                "finite-difference lookup outside the grid; point left empty"
            );
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn sweep<F>(
    parameter: SweepParameter,
    base: &OptionContract,
    points: &[Real],
    names: &[&str],
    price_point: F,
) -> Result<SeriesSet>
where
    F: Fn(&OptionContract, usize) -> Result<Vec<Option<Real>>> + Sync,
{
    if points.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "a {parameter} sweep needs at least one point"
        )));
    }

    let start = Instant::now();
    info!(%parameter, points = points.len(), "starting sweep");

    let rows: Vec<Vec<Option<Real>>> = points
        .par_iter()
        .enumerate()
        .map(|(i, &value)| {
            let contract = parameter.apply(base, value)?;
            let row = price_point(&contract, i)?;
            debug!(%parameter, value, ?row, "priced point");
            Ok(row)
        })
        .collect::<Result<_>>()?;

    let series = names
        .iter()
        .enumerate()
        .map(|(k, name)| Series {
            name: (*name).to_owned(),
            values: rows.iter().map(|row| row[k]).collect(),
        })
        .collect();

    info!(
        %parameter,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "sweep finished"
    );
    Ok(SeriesSet {
        parameter,
        points: points.to_vec(),
        series,
    })
}

fn compare_methods(
    parameter: SweepParameter,
    base: &OptionContract,
    points: &[Real],
    settings: &CompareSettings,
) -> Result<SeriesSet> {
    uncovered_points(parameter, base, points, &settings.fds);
    sweep(parameter, base, points, &METHOD_SERIES, |contract, i| {
        let mc = settings.mc.with_seed(point_seed(settings.mc.seed, i));
        let fds_call = fds_or_gap(contract, OptionType::Call, &settings.fds)?;
        let fds_put = fds_or_gap(contract, OptionType::Put, &settings.fds)?;
        let mc_call = compute(contract, OptionType::Call, &mc)?;
        let mc_put = compute(contract, OptionType::Put, &mc)?;
        Ok(vec![
            fds_call,
            fds_put,
            Some(mc_call.price),
            Some(mc_put.price),
            Some(mc_call.conf95),
            Some(mc_put.conf95),
        ])
    })
}

fn compare_options(
    parameter: SweepParameter,
    base: &OptionContract,
    points: &[Real],
    fds: &FdsGridConfig,
) -> Result<SeriesSet> {
    uncovered_points(parameter, base, points, fds);
    sweep(parameter, base, points, &OPTION_SERIES, |contract, _| {
        Ok(vec![
            fds_or_gap(contract, OptionType::Call, fds)?,
            fds_or_gap(contract, OptionType::Put, fds)?,
            Some(european_price(contract, OptionType::Call)?),
            Some(european_price(contract, OptionType::Put)?),
        ])
    })
}

/// Finite differences against control-variate Monte Carlo, call and put,
/// for each volatility in `volatilities`.
pub fn compare_methods_over_volatility(
    base: &OptionContract,
    volatilities: &[Real],
    settings: &CompareSettings,
) -> Result<SeriesSet> {
    compare_methods(SweepParameter::Volatility, base, volatilities, settings)
}

/// Finite differences against control-variate Monte Carlo, call and put,
/// for each spot in `initial_prices`.
pub fn compare_methods_over_spot(
    base: &OptionContract,
    initial_prices: &[Real],
    settings: &CompareSettings,
) -> Result<SeriesSet> {
    compare_methods(SweepParameter::InitialPrice, base, initial_prices, settings)
}

/// Asian against European prices for each volatility in `volatilities`.
pub fn compare_options_over_volatility(
    base: &OptionContract,
    volatilities: &[Real],
    fds: &FdsGridConfig,
) -> Result<SeriesSet> {
    compare_options(SweepParameter::Volatility, base, volatilities, fds)
}

/// Asian against European prices for each spot in `initial_prices`.
pub fn compare_options_over_spot(
    base: &OptionContract,
    initial_prices: &[Real],
    fds: &FdsGridConfig,
) -> Result<SeriesSet> {
    compare_options(SweepParameter::InitialPrice, base, initial_prices, fds)
}

// ─── Single contract ──────────────────────────────────────────────────────────

/// A price quoted by one method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// `"FDS"`, `"CVMC"` or `"European"`.
    pub method: String,
    /// `"call"` or `"put"`.
    pub option_type: String,
    /// Price.
    pub price: Price,
    /// Monte Carlo confidence half-width, if any.
    pub conf95: Option<Real>,
}

/// Price `contract` with every engine, call and put.
pub fn quote_contract(contract: &OptionContract, settings: &CompareSettings) -> Result<Vec<Quote>> {
    warn_if_uncovered(contract, &settings.fds);
    let mut quotes = Vec::with_capacity(6);
    for option_type in [OptionType::Call, OptionType::Put] {
        let fds = solve(contract, option_type, &settings.fds)?;
        let mc = compute(contract, option_type, &settings.mc)?;
        let euro = european_price(contract, option_type)?;
        let ty = option_type.to_string();
        quotes.push(Quote {
            method: "FDS".into(),
            option_type: ty.clone(),
            price: fds,
            conf95: None,
        });
        quotes.push(Quote {
            method: "CVMC".into(),
            option_type: ty.clone(),
            price: mc.price,
            conf95: Some(mc.conf95),
        });
        quotes.push(Quote {
            method: "European".into(),
            option_type: ty,
            price: euro,
            conf95: None,
        });
    }
    Ok(quotes)
}

/// Put-call parity of the finite-difference prices.
///
/// The Asian parity value is `S₀·Γ(T) − K·e^(−rT)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParityCheck {
    /// Finite-difference call price.
    pub call: Price,
    /// Finite-difference put price.
    pub put: Price,
    /// `call − put`.
    pub numerical: Real,
    /// `S₀·Γ(T) − K·e^(−rT)`.
    pub analytical: Real,
    /// `1 − numerical / analytical`; the absolute difference when the
    /// analytical value is zero.
    pub deviation: Real,
    /// Accepted `|deviation|`.
    pub tolerance: Real,
    /// `|deviation| ≤ tolerance`.
    pub holds: bool,
}

/// Check put-call parity of the finite-difference engine for `contract`.
pub fn check_put_call_parity(
    contract: &OptionContract,
    fds: &FdsGridConfig,
    tolerance: Real,
) -> Result<ParityCheck> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "parity tolerance must be positive, got {tolerance}"
        )));
    }
    warn_if_uncovered(contract, fds);
    let call = solve(contract, OptionType::Call, fds)?;
    let put = solve(contract, OptionType::Put, fds)?;
    let t = contract.time_to_maturity();
    let analytical = contract.initial_price() * averaging_factor(contract.interest_rate(), t, t)
        - contract.strike_price() * contract.discount();
    let numerical = call - put;
    let deviation = if analytical == 0.0 {
        numerical
    } else {
        1.0 - numerical / analytical
    };
    let holds = deviation.abs() <= tolerance;
    info!(numerical, analytical, deviation, holds, "put-call parity");
    Ok(ParityCheck {
        call,
        put,
        numerical,
        analytical,
        deviation,
        tolerance,
        holds,
    })
}
