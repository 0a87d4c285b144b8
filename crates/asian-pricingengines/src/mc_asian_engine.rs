//! Control-variate Monte Carlo engine for arithmetic-average Asian options.
//!
//! For each simulated path the arithmetic-average payoff `A` and the
//! geometric-average payoff `G` are evaluated on the same levels. The
//! geometric option has a closed form, so
//!
//! ```text
//! price = e^(−rT) · E[A − G] + geometric_price
//! ```
//!
//! is unbiased for the arithmetic price, and `A − G` has a much smaller
//! variance than `A` alone.

use crate::analytic_geometric_asian_engine::geometric_asian_price;
use asian_core::{ensure, fail, OptionContract, OptionType, Price, Real, Result, Size};
use asian_math::{MersenneTwisterRng, Statistics};
use asian_methods::{
    ArithmeticAsianPathPricer, GbmPathGenerator, GeometricAsianPathPricer, PathPricer,
};
use rand::Rng;

/// Simulation size and seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct McConfig {
    /// Time steps `N` per path (≥ 1).
    pub time_steps: Size,
    /// Number of paths `n` (≥ 1).
    pub paths: Size,
    /// Seed of the Mersenne Twister generator.
    pub seed: u64,
}

impl McConfig {
    /// Configuration with the default seed.
    pub fn new(time_steps: Size, paths: Size) -> Self {
        Self {
            time_steps,
            paths,
            ..Self::default()
        }
    }

    /// Same simulation size, different seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for McConfig {
    fn default() -> Self {
        Self {
            time_steps: 500,
            paths: 1000,
            seed: 42,
        }
    }
}

/// Price estimate with the half-width of its 95% confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McEstimate {
    /// Control-variate price estimate.
    pub price: Price,
    /// `1.96 · σ(A − G) / √n`, undiscounted.
    pub conf95: Real,
}

impl From<McEstimate> for (Price, Real) {
    fn from(e: McEstimate) -> Self {
        (e.price, e.conf95)
    }
}

/// Price an arithmetic-average Asian option by control-variate Monte Carlo,
/// drawing from a Mersenne Twister seeded with `config.seed`.
///
/// # Errors
/// `InvalidParameter` if `time_steps` or `paths` is zero.
pub fn compute(
    contract: &OptionContract,
    option_type: OptionType,
    config: &McConfig,
) -> Result<McEstimate> {
    let mut rng = MersenneTwisterRng::new(config.seed);
    compute_with_rng(contract, option_type, config.time_steps, config.paths, &mut rng)
}

/// As [`compute`], drawing normals from a caller-supplied generator.
pub fn compute_with_rng<R: Rng + ?Sized>(
    contract: &OptionContract,
    option_type: OptionType,
    time_steps: Size,
    paths: Size,
    rng: &mut R,
) -> Result<McEstimate> {
    ensure!(time_steps >= 1, "time steps must be at least 1, got {time_steps}");
    ensure!(paths >= 1, "path count must be at least 1, got {paths}");

    let strike = contract.strike_price();
    let geometric_price = geometric_asian_price(contract, option_type)?;

    let generator = GbmPathGenerator::new(
        contract.initial_price(),
        contract.interest_rate(),
        contract.volatility(),
        contract.time_to_maturity(),
        time_steps,
    )?;
    let batch = generator.generate(paths, rng)?;

    let arithmetic = ArithmeticAsianPathPricer::new(option_type, strike);
    let geometric = GeometricAsianPathPricer::new(option_type, strike);
    let stats: Statistics = batch
        .iter()
        .map(|path| arithmetic.value(path) - geometric.value(path))
        .collect();

    let (Some(mean), Some(conf95)) = (stats.mean(), stats.confidence_95()) else {
        fail!("no Monte Carlo samples were accumulated");
    };
    let price = contract.discount() * mean + geometric_price;
    if !price.is_finite() {
        fail!("Monte Carlo {option_type} price is not finite: {price}");
    }
    Ok(McEstimate { price, conf95 })
}
