//! Tridiagonal operators and the Thomas algorithm.

use asian_core::{ensure, fail, Real, Result};

/// A tridiagonal matrix operator.
///
/// Stores the lower, diagonal, and upper bands, each of length `n`.
/// `lower[0]` and `upper[n−1]` lie outside the matrix and are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    /// Lower diagonal (index 0 unused; starts from row 1).
    pub lower: Vec<Real>,
    /// Main diagonal.
    pub diag: Vec<Real>,
    /// Upper diagonal (last index unused; ends at row n−2).
    pub upper: Vec<Real>,
}

impl TridiagonalOperator {
    /// Create a zero tridiagonal operator of size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
        }
    }

    /// Build the operator with diagonal `1 + 2·sign·c_i` and both
    /// off-diagonals of row `i` equal to `−sign·c_i`.
    ///
    /// `sign = −1` gives the explicit operator `I + C·D₂`, `sign = +1` the
    /// implicit operator `I − C·D₂`, where `D₂ = tridiag(1, −2, 1)` and
    /// `C = diag(c)`. The two share `C·D₂` and therefore commute.
    pub fn second_difference(coefficients: &[Real], sign: Real) -> Self {
        let n = coefficients.len();
        let mut op = Self::new(n);
        for (i, &c) in coefficients.iter().enumerate() {
            op.diag[i] = 1.0 + 2.0 * sign * c;
            if i > 0 {
                op.lower[i] = -sign * c;
            }
            if i + 1 < n {
                op.upper[i] = -sign * c;
            }
        }
        op
    }

    /// Size (number of rows/columns).
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Apply the operator: `y = A · x`.
    pub fn apply(&self, x: &[Real]) -> Vec<Real> {
        let mut y = vec![0.0; self.size()];
        self.apply_into(x, &mut y);
        y
    }

    /// Apply the operator into a caller-owned buffer.
    pub fn apply_into(&self, x: &[Real], y: &mut [Real]) {
        let n = self.size();
        assert_eq!(x.len(), n);
        assert_eq!(y.len(), n);
        match n {
            0 => {}
            1 => y[0] = self.diag[0] * x[0],
            _ => {
                y[0] = self.diag[0] * x[0] + self.upper[0] * x[1];
                for i in 1..n - 1 {
                    y[i] = self.lower[i] * x[i - 1] + self.diag[i] * x[i] + self.upper[i] * x[i + 1];
                }
                y[n - 1] = self.lower[n - 1] * x[n - 2] + self.diag[n - 1] * x[n - 1];
            }
        }
    }

    /// LU-factorise the operator for repeated Thomas solves.
    ///
    /// # Errors
    /// `Runtime` if a pivot vanishes or is not finite.
    pub fn factorize(&self) -> Result<TridiagonalFactorization> {
        let n = self.size();
        ensure!(n > 0, "cannot factorise an empty tridiagonal operator");

        let mut c_prime = vec![0.0; n];
        let mut inv_pivot = vec![0.0; n];

        let mut pivot = self.diag[0];
        for i in 0..n {
            if i > 0 {
                pivot = self.diag[i] - self.lower[i] * c_prime[i - 1];
            }
            if pivot == 0.0 || !pivot.is_finite() {
                fail!("tridiagonal pivot {pivot} at row {i}");
            }
            inv_pivot[i] = 1.0 / pivot;
            if i + 1 < n {
                c_prime[i] = self.upper[i] * inv_pivot[i];
            }
        }

        Ok(TridiagonalFactorization {
            lower: self.lower.clone(),
            c_prime,
            inv_pivot,
        })
    }

    /// Solve `A · x = rhs` using the Thomas algorithm.
    pub fn solve(&self, rhs: &[Real]) -> Result<Vec<Real>> {
        let mut x = rhs.to_vec();
        self.factorize()?.solve_in_place(&mut x);
        Ok(x)
    }
}

/// The forward-sweep coefficients of a [`TridiagonalOperator`].
///
/// Factorising once and solving several right-hand sides is what replaces a
/// dense inverse: each solve is `O(n)`.
#[derive(Debug, Clone)]
pub struct TridiagonalFactorization {
    lower: Vec<Real>,
    c_prime: Vec<Real>,
    inv_pivot: Vec<Real>,
}

impl TridiagonalFactorization {
    /// Size of the factorised system.
    pub fn size(&self) -> usize {
        self.inv_pivot.len()
    }

    /// Overwrite `x` (holding the right-hand side) with the solution.
    pub fn solve_in_place(&self, x: &mut [Real]) {
        let n = self.size();
        assert_eq!(x.len(), n);

        // Forward sweep
        x[0] *= self.inv_pivot[0];
        for i in 1..n {
            x[i] = (x[i] - self.lower[i] * x[i - 1]) * self.inv_pivot[i];
        }

        // Back substitution
        for i in (0..n - 1).rev() {
            x[i] -= self.c_prime[i] * x[i + 1];
        }
    }
}
