//! Sample statistics accumulator.

use asian_core::Real;

/// Incremental statistics accumulator.
///
/// Uses Welford's update so that the variance of samples with a large common
/// offset does not cancel. The variance is the population one (divides by
/// `n`), as used by the Monte Carlo confidence interval.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: usize,
    mean: Real,
    m2: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as Real;
        self.m2 += delta * (x - self.mean);
    }

    /// Sample mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then_some(self.mean)
    }

    /// Population variance (divides by `n`).  Returns `None` if empty.
    pub fn population_variance(&self) -> Option<Real> {
        (self.count > 0).then(|| self.m2 / self.count as Real)
    }

    /// Population standard deviation.
    pub fn population_std_dev(&self) -> Option<Real> {
        self.population_variance().map(Real::sqrt)
    }

    /// Half-width of the asymptotic two-sided 95% confidence interval of the
    /// mean, `1.96 · σ_pop / √n`.
    pub fn confidence_95(&self) -> Option<Real> {
        self.population_std_dev()
            .map(|s| 1.96 * s / (self.count as Real).sqrt())
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Real> for Statistics {
    fn extend<I: IntoIterator<Item = Real>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<Real> for Statistics {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        let mut s = Statistics::new();
        s.extend(iter);
        s
    }
}
