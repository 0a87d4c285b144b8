//! Subcommand implementations.
//!
//! Every command starts from the TOML config (or the defaults), applies the
//! command line overrides, and returns the rendered output.

pub mod parity;
pub mod price;
pub mod sweep;

use asian_cli::config::LookupSetting;
use asian_cli::{Result, SweepConfig};
use clap::{Args, ValueEnum};
use std::path::Path;
use tracing::info;

/// Contract overrides.
#[derive(Args, Debug, Default)]
pub struct MarketArgs {
    /// Initial price S₀
    #[arg(long)]
    pub spot: Option<f64>,
    /// Strike K
    #[arg(long)]
    pub strike: Option<f64>,
    /// Risk-free rate r
    #[arg(long)]
    pub rate: Option<f64>,
    /// Volatility σ
    #[arg(long)]
    pub vol: Option<f64>,
    /// Time to maturity T in years
    #[arg(long)]
    pub maturity: Option<f64>,
}

/// Engine overrides.
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// Finite-difference time steps
    #[arg(long)]
    pub fds_time_steps: Option<usize>,
    /// Finite-difference spatial intervals
    #[arg(long)]
    pub fds_space_steps: Option<usize>,
    /// Half-width of the finite-difference domain; keep it at least
    /// 2·vol·√maturity (10 for the default volatility axis)
    #[arg(long)]
    pub spatial_size: Option<f64>,
    /// Terminal lookup rule
    #[arg(long, value_enum)]
    pub lookup: Option<Lookup>,
    /// Monte Carlo time steps per path
    #[arg(long)]
    pub mc_steps: Option<usize>,
    /// Monte Carlo paths
    #[arg(long)]
    pub paths: Option<usize>,
    /// Monte Carlo base seed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Terminal lookup rule on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lookup {
    /// Nearest grid node
    Nearest,
    /// Linear interpolation
    Linear,
}

/// What a sweep compares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Comparison {
    /// Finite differences against control-variate Monte Carlo
    #[default]
    Methods,
    /// Asian against European options
    Options,
}

/// Arguments of `asian price`.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments of the sweep commands.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Comma-separated parameter values; defaults to the config file axis
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub values: Vec<f64>,
    /// What to compare
    #[arg(long, value_enum, default_value_t = Comparison::Methods)]
    pub compare: Comparison,
    #[command(flatten)]
    pub market: MarketArgs,
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments of `asian parity`.
#[derive(Args, Debug)]
pub struct ParityArgs {
    /// Accepted relative deviation from the parity value
    #[arg(long, default_value_t = 0.05)]
    pub tolerance: f64,
    #[command(flatten)]
    pub market: MarketArgs,
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Load the config file (if any) and apply the overrides.
pub fn resolve(
    path: Option<&Path>,
    market: &MarketArgs,
    engine: &EngineArgs,
) -> Result<SweepConfig> {
    let mut cfg = match path {
        Some(p) => {
            info!(path = %p.display(), "loading config");
            SweepConfig::load(p)?
        }
        None => SweepConfig::default(),
    };

    let c = &mut cfg.contract;
    override_with(&mut c.initial_price, market.spot);
    override_with(&mut c.strike_price, market.strike);
    override_with(&mut c.interest_rate, market.rate);
    override_with(&mut c.volatility, market.vol);
    override_with(&mut c.time_to_maturity, market.maturity);

    let f = &mut cfg.fds;
    override_with(&mut f.time_partition_size, engine.fds_time_steps);
    override_with(&mut f.spatial_partition_size, engine.fds_space_steps);
    override_with(&mut f.spatial_size, engine.spatial_size);
    override_with(
        &mut f.lookup,
        engine.lookup.map(|l| match l {
            Lookup::Nearest => LookupSetting::NearestNode,
            Lookup::Linear => LookupSetting::Linear,
        }),
    );

    let m = &mut cfg.monte_carlo;
    override_with(&mut m.time_steps, engine.mc_steps);
    override_with(&mut m.paths, engine.paths);
    override_with(&mut m.seed, engine.seed);

    Ok(cfg)
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
