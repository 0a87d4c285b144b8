//! Monte Carlo simulation framework.
//!
//! # Overview
//!
//! * [`GbmPathGenerator`] — exact log-Euler simulation of geometric Brownian
//!   motion on a uniform time grid
//! * [`PathBatch`] — `n` independent paths of `N + 1` price levels
//! * [`PathPricer`] — trait for evaluating a payoff on one path
//! * [`ArithmeticAsianPathPricer`] / [`GeometricAsianPathPricer`] —
//!   undiscounted average-price payoffs

use asian_core::{ensure, OptionType, Real, Result, Time};
use asian_math::fill_standard_normals;
use rand::Rng;

// ─── PathBatch ────────────────────────────────────────────────────────────────

/// A batch of simulated price paths.
///
/// Conceptually an `(N + 1) × n` array whose row 0 is the common initial
/// price and whose columns are independent paths. Each path is stored
/// contiguously so that per-path averages read sequential memory.
#[derive(Debug, Clone)]
pub struct PathBatch {
    steps: usize,
    values: Vec<Real>,
}

impl PathBatch {
    /// Iterate over all paths.
    pub fn iter(&self) -> impl Iterator<Item = &[Real]> + '_ {
        self.values.chunks_exact(self.steps + 1)
    }
}

// ─── PathGenerator ────────────────────────────────────────────────────────────

/// Generates geometric Brownian motion paths.
///
/// `S_k = S₀ · exp((μ − σ²/2)·k·dt + σ·√dt·Σ_{m≤k} Z_m)` with `dt = T / N`
/// and `Z_m` i.i.d. standard normal. The scheme is exact at the grid
/// times, so there is no discretisation bias in the sampled levels.
#[derive(Debug, Clone, Copy)]
pub struct GbmPathGenerator {
    x0: Real,
    drift: Real,
    sigma: Real,
    dt: Time,
    steps: usize,
}

impl GbmPathGenerator {
    /// Create a new path generator.
    ///
    /// # Arguments
    /// * `x0` — initial asset price (must be > 0)
    /// * `drift` — drift rate μ (the risk-free rate under Q)
    /// * `sigma` — volatility (must be > 0)
    /// * `maturity` — total time horizon
    /// * `steps` — number of time steps (≥ 1)
    pub fn new(x0: Real, drift: Real, sigma: Real, maturity: Time, steps: usize) -> Result<Self> {
        ensure!(x0 > 0.0, "initial value must be positive, got {x0}");
        ensure!(sigma > 0.0, "volatility must be positive, got {sigma}");
        ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");
        ensure!(steps >= 1, "paths need at least one time step");
        Ok(Self {
            x0,
            drift,
            sigma,
            dt: maturity / steps as Real,
            steps,
        })
    }

    /// Time step `dt = T / N`.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Simulate `paths` independent paths.
    ///
    /// Normals are drawn path by path, step by step, so a given generator
    /// state always yields the same batch.
    pub fn generate<R: Rng + ?Sized>(&self, paths: usize, rng: &mut R) -> Result<PathBatch> {
        ensure!(paths >= 1, "at least one path is required");
        let len = self.steps + 1;
        let mu_dt = (self.drift - 0.5 * self.sigma * self.sigma) * self.dt;
        let vol_sqrt_dt = self.sigma * self.dt.sqrt();

        let mut values = vec![0.0; paths * len];
        let mut normals = vec![0.0; self.steps];
        for path in values.chunks_exact_mut(len) {
            fill_standard_normals(rng, &mut normals);
            path[0] = self.x0;
            let mut log_return = 0.0;
            for (k, z) in normals.iter().enumerate() {
                log_return += mu_dt + vol_sqrt_dt * z;
                path[k + 1] = self.x0 * log_return.exp();
            }
        }

        Ok(PathBatch {
            steps: self.steps,
            values,
        })
    }
}

// ─── Averages ─────────────────────────────────────────────────────────────────

/// Arithmetic mean of all levels of a path (initial price included).
pub fn arithmetic_mean(path: &[Real]) -> Real {
    path.iter().sum::<Real>() / path.len() as Real
}

/// Geometric mean of all levels of a path (initial price included).
pub fn geometric_mean(path: &[Real]) -> Real {
    (path.iter().map(|s| s.ln()).sum::<Real>() / path.len() as Real).exp()
}

// ─── PathPricer ───────────────────────────────────────────────────────────────

/// Computes the payoff of an instrument on a single path.
pub trait PathPricer: Send + Sync {
    /// Evaluate the (undiscounted) payoff for a given path.
    fn value(&self, path: &[Real]) -> Real;
}

/// Average-price Asian payoff on the arithmetic mean.
#[derive(Debug, Clone, Copy)]
pub struct ArithmeticAsianPathPricer {
    option_type: OptionType,
    strike: Real,
}

impl ArithmeticAsianPathPricer {
    /// Create an arithmetic-average pricer.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl PathPricer for ArithmeticAsianPathPricer {
    fn value(&self, path: &[Real]) -> Real {
        self.option_type.payoff(arithmetic_mean(path), self.strike)
    }
}

/// Average-price Asian payoff on the geometric mean.
#[derive(Debug, Clone, Copy)]
pub struct GeometricAsianPathPricer {
    option_type: OptionType,
    strike: Real,
}

impl GeometricAsianPathPricer {
    /// Create a geometric-average pricer.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl PathPricer for GeometricAsianPathPricer {
    fn value(&self, path: &[Real]) -> Real {
        self.option_type.payoff(geometric_mean(path), self.strike)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use asian_math::MersenneTwisterRng;

    #[test]
    fn batch_shape_and_initial_row() {
        let gen = GbmPathGenerator::new(50.0, 0.05, 0.3, 1.0, 12).unwrap();
        let mut rng = MersenneTwisterRng::new(1);
        let batch = gen.generate(7, &mut rng).unwrap();
        assert_eq!(batch.iter().count(), 7);
        for path in batch.iter() {
            assert_eq!(path.len(), 13);
            assert_eq!(path[0], 50.0);
            assert!(path.iter().all(|&s| s > 0.0));
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let gen = GbmPathGenerator::new(50.0, 0.05, 0.3, 1.0, 20).unwrap();
        let a = gen.generate(5, &mut MersenneTwisterRng::new(9)).unwrap();
        let b = gen.generate(5, &mut MersenneTwisterRng::new(9)).unwrap();
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn terminal_mean_is_forward() {
        let gen = GbmPathGenerator::new(100.0, 0.05, 0.2, 1.0, 4).unwrap();
        let batch = gen.generate(40_000, &mut MersenneTwisterRng::new(42)).unwrap();
        let mean = batch.iter().map(|p| p[4]).sum::<Real>() / 40_000.0;
        let forward = 100.0 * (0.05_f64).exp();
        // σ_S ≈ 21, standard error ≈ 0.11
        assert!((mean - forward).abs() < 0.5, "E[S_T] = {mean}, forward {forward}");
    }

    #[test]
    fn averages() {
        let path = [1.0, 2.0, 4.0];
        assert_abs_diff_eq!(arithmetic_mean(&path), 7.0 / 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(geometric_mean(&path), 2.0, epsilon = 1e-14);
    }

    #[test]
    fn am_gm_payoff_ordering() {
        let path = [40.0, 55.0, 62.0, 48.0];
        let call_a = ArithmeticAsianPathPricer::new(OptionType::Call, 50.0).value(&path);
        let call_g = GeometricAsianPathPricer::new(OptionType::Call, 50.0).value(&path);
        let put_a = ArithmeticAsianPathPricer::new(OptionType::Put, 55.0).value(&path);
        let put_g = GeometricAsianPathPricer::new(OptionType::Put, 55.0).value(&path);
        assert!(call_a >= call_g);
        assert!(put_a <= put_g);
        assert_abs_diff_eq!(call_a, 1.25, epsilon = 1e-12);
    }

    #[test]
    fn invalid_generator_inputs() {
        assert!(GbmPathGenerator::new(50.0, 0.05, 0.3, 1.0, 0).is_err());
        assert!(GbmPathGenerator::new(0.0, 0.05, 0.3, 1.0, 10).is_err());
        let gen = GbmPathGenerator::new(50.0, 0.05, 0.3, 1.0, 10).unwrap();
        assert!(gen.generate(0, &mut MersenneTwisterRng::new(1)).is_err());
    }
}
