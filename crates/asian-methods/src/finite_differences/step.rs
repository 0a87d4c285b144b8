//! Split explicit/implicit (theta) time step on the interior nodes.

use super::tridiagonal::{TridiagonalFactorization, TridiagonalOperator};
use asian_core::{ensure, Real, Result};

/// One Crank-Nicolson style step
///
/// ```text
/// next = F · B⁻¹ · prev + B⁻¹ · boundary
/// ```
///
/// with `F` the explicit operator, `B` the implicit operator and `boundary`
/// the combined Dirichlet contribution of both half steps. `B` is factorised
/// once on construction; every application costs two `O(n)` Thomas solves.
/// When `F` and `B` commute (same coefficient matrix) this equals the usual
/// `B⁻¹ · (F · prev + boundary)`.
#[derive(Debug, Clone)]
pub struct ThetaStep {
    explicit: TridiagonalOperator,
    implicit: TridiagonalFactorization,
    boundary: Vec<Real>,
}

impl ThetaStep {
    /// Prepare a step from the two operators and the boundary vector.
    pub fn new(
        explicit: TridiagonalOperator,
        implicit: &TridiagonalOperator,
        mut boundary: Vec<Real>,
    ) -> Result<Self> {
        let n = explicit.size();
        ensure!(
            implicit.size() == n && boundary.len() == n,
            "operator sizes differ: explicit {n}, implicit {}, boundary {}",
            implicit.size(),
            boundary.len()
        );
        let implicit = implicit.factorize()?;
        implicit.solve_in_place(&mut boundary);
        Ok(Self {
            explicit,
            implicit,
            boundary,
        })
    }

    /// Advance `prev` into `next`; `scratch` must have the same length.
    pub fn apply(&self, prev: &[Real], next: &mut [Real], scratch: &mut [Real]) {
        scratch.copy_from_slice(prev);
        self.implicit.solve_in_place(scratch);
        self.explicit.apply_into(scratch, next);
        for (v, b) in next.iter_mut().zip(&self.boundary) {
            *v += b;
        }
    }
}
