//! Finite-difference engine for arithmetic-average Asian options.
//!
//! The price of an average-price option under Black-Scholes reduces to a
//! one-dimensional PDE in the state variable
//!
//! ```text
//! z = Γ(t) − (∫₀ᵗ S dτ / T − K)·e^(−rT) / S_t,   Γ(t) = (1 − e^(−rt)) / (rT)
//! ```
//!
//! with the normalised value `u(t, z)` solving
//!
//! ```text
//! ∂u/∂t = ½ σ² (Γ(t) − z)² ∂²u/∂z²,   u(0, z) = max(z, 0)
//! ```
//!
//! marched forward from the payoff. The option price is `S₀ · u(T, z₀)`
//! with `z₀ = Γ(T) − K e^(−rT) / S₀`.
//!
//! The put is solved in the reflected variable `x = −z`: its payoff row and
//! boundaries are the call's, the diffusion coefficient uses `−Γ` and the
//! lookup target is `−z₀`. That keeps one code path for both legs and
//! preserves put-call parity.

use asian_core::{
    averaging_factor, ensure, fail, Error, OptionContract, OptionType, Price, Real, Result, Size,
    Time,
};
use asian_methods::{FdmGrid, ThetaStep, TridiagonalOperator, UniformGrid};

// ─── Configuration ────────────────────────────────────────────────────────────

/// How the price is read off the final time layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TerminalLookup {
    /// Value at a single grid node next to the target.
    ///
    /// With `k` the first interval bracketing the target, the node is
    /// `k` for even `k` and `k + 1` for odd `k` (the midpoint `k + ½`
    /// rounded half to even).
    #[default]
    NearestNode,
    /// Linear interpolation between the two bracketing nodes.
    Linear,
}

/// Discretisation of the finite-difference scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdsGridConfig {
    /// Number of time steps `N_t` (≥ 1).
    pub time_partition_size: Size,
    /// Number of spatial intervals `M` (≥ 2).
    pub spatial_partition_size: Size,
    /// Half-width `S` of the truncated spatial domain `[−S, S]`.
    pub spatial_size: Real,
    /// Terminal lookup rule.
    pub lookup: TerminalLookup,
}

impl FdsGridConfig {
    /// A nearest-node configuration on `[−3, 3]`.
    pub fn new(time_partition_size: Size, spatial_partition_size: Size) -> Self {
        Self {
            time_partition_size,
            spatial_partition_size,
            ..Self::default()
        }
    }

    /// Same grid, different lookup rule.
    pub fn with_lookup(mut self, lookup: TerminalLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Same grid, different domain half-width.
    pub fn with_spatial_size(mut self, spatial_size: Real) -> Self {
        self.spatial_size = spatial_size;
        self
    }

    /// Check the partition sizes and the domain width.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.time_partition_size >= 1,
            "time partition size must be at least 1, got {}",
            self.time_partition_size
        );
        ensure!(
            self.spatial_partition_size >= 2,
            "spatial partition size must be at least 2, got {}",
            self.spatial_partition_size
        );
        ensure!(
            self.spatial_size.is_finite() && self.spatial_size > 0.0,
            "spatial size must be positive, got {}",
            self.spatial_size
        );
        Ok(())
    }

    /// Whether `[−S, S]` is wide enough for the contract's diffusion,
    /// `σ·√T ≤ S / 2`.
    ///
    /// Past that point the truncated domain shifts prices by more than
    /// about one percent; widen [`spatial_size`](Self::spatial_size) (and
    /// the spatial partition with it) for such contracts.
    pub fn covers(&self, contract: &OptionContract) -> bool {
        contract.volatility() * contract.time_to_maturity().sqrt() <= 0.5 * self.spatial_size
    }
}

impl Default for FdsGridConfig {
    fn default() -> Self {
        Self {
            time_partition_size: 500,
            spatial_partition_size: 1000,
            spatial_size: 3.0,
            lookup: TerminalLookup::NearestNode,
        }
    }
}

// ─── Solution ─────────────────────────────────────────────────────────────────

/// Full output of one finite-difference run.
#[derive(Debug, Clone)]
pub struct FdsSolution {
    /// `u[i, j]`, one row per time layer.
    pub grid: FdmGrid,
    /// Spatial nodes `z_j`.
    pub spatial: UniformGrid,
    /// Time nodes `t_i = i·dt`.
    pub times: Vec<Time>,
    /// Lookup target in the leg's own coordinate.
    pub target: Real,
    /// Column read for [`TerminalLookup::NearestNode`]; lower bracketing
    /// column for [`TerminalLookup::Linear`].
    pub column: usize,
    /// `S₀ · u(T, target)`.
    pub price: Price,
}

// ─── Engine ───────────────────────────────────────────────────────────────────

/// Price an arithmetic-average Asian option by finite differences.
///
/// # Errors
/// * `InvalidParameter` for an invalid grid configuration;
/// * `DomainTooNarrow` if the lookup target falls outside `[−S, S]`;
/// * `Runtime` if the scheme produces a non-finite price.
pub fn solve(
    contract: &OptionContract,
    option_type: OptionType,
    config: &FdsGridConfig,
) -> Result<Price> {
    solve_with_grid(contract, option_type, config).map(|s| s.price)
}

/// As [`solve`], returning the whole space-time grid.
pub fn solve_with_grid(
    contract: &OptionContract,
    option_type: OptionType,
    config: &FdsGridConfig,
) -> Result<FdsSolution> {
    config.validate()?;

    let s0 = contract.initial_price();
    let rate = contract.interest_rate();
    let half_var = 0.5 * contract.volatility() * contract.volatility();
    let maturity = contract.time_to_maturity();
    let phi = option_type.sign();

    let n_t = config.time_partition_size;
    let m = config.spatial_partition_size;
    let width = config.spatial_size;

    let spatial = UniformGrid::symmetric(width, m)?;
    let dt = maturity / n_t as Real;
    let dz = spatial.step();
    let d = dt / (dz * dz);
    let times: Vec<Time> = (0..=n_t).map(|i| i as Real * dt).collect();

    let discounted_strike = contract.strike_price() * contract.discount() / s0;
    let target = phi * (averaging_factor(rate, maturity, maturity) - discounted_strike);
    let k = spatial.bracket(target).ok_or(Error::DomainTooNarrow {
        target,
        lower: spatial.front(),
        upper: spatial.back(),
    })?;

    let mut grid = FdmGrid::zeros(n_t + 1, m + 1);
    for (u, j) in grid.row_mut(0).iter_mut().zip(0..) {
        *u = spatial.at(j).max(0.0);
    }
    let z_top = spatial.back();
    let upper_value = z_top.max(0.0);

    let interior = m - 1;
    let mut coefficients = vec![0.0; interior];
    let mut scratch = vec![0.0; interior];

    for i in 1..=n_t {
        let gamma_f = phi * averaging_factor(rate, times[i - 1], maturity);
        let gamma_b = phi * averaging_factor(rate, times[i], maturity);

        for (c, j) in coefficients.iter_mut().zip(1..) {
            let x = gamma_f - spatial.at(j);
            *c = 0.5 * d * half_var * x * x;
        }
        let explicit = TridiagonalOperator::second_difference(&coefficients, -1.0);
        let implicit = TridiagonalOperator::second_difference(&coefficients, 1.0);

        let forward_edge = width * 0.5 * d * half_var * (gamma_f - z_top).powi(2);
        let backward_edge = -width * 0.5 * d * half_var * (gamma_b - z_top).powi(2);
        let mut boundary = vec![0.0; interior];
        boundary[interior - 1] = forward_edge - backward_edge;

        let step = ThetaStep::new(explicit, &implicit, boundary)?;
        let (prev, next) = grid.layers_mut(i);
        step.apply(&prev[1..m], &mut next[1..m], &mut scratch);
        next[0] = 0.0;
        next[m] = upper_value;
    }

    let last = grid.rows() - 1;
    let (column, value) = match config.lookup {
        TerminalLookup::NearestNode => {
            let column = if k % 2 == 0 { k } else { k + 1 };
            (column, grid.get(last, column))
        }
        TerminalLookup::Linear => {
            let w = (target - spatial.at(k)) / dz;
            (k, (1.0 - w) * grid.get(last, k) + w * grid.get(last, k + 1))
        }
    };
    let price = s0 * value;
    if !price.is_finite() {
        fail!("finite-difference {option_type} price is not finite: {price}");
    }

    Ok(FdsSolution {
        grid,
        spatial,
        times,
        target,
        column,
        price,
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
