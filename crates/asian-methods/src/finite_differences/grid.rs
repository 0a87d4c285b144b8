//! Uniform one-dimensional meshes and the space-time value grid.

use asian_core::{ensure, Real, Result};

/// A uniform mesh `x_j = lower + j·step`, `j = 0..size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGrid {
    lower: Real,
    step: Real,
    size: usize,
}

impl UniformGrid {
    /// Mesh of `intervals + 1` nodes covering `[lower, upper]`.
    pub fn new(lower: Real, upper: Real, intervals: usize) -> Result<Self> {
        ensure!(intervals >= 1, "a grid needs at least one interval");
        ensure!(
            lower.is_finite() && upper.is_finite() && upper > lower,
            "grid bounds must satisfy lower < upper, got [{lower}, {upper}]"
        );
        Ok(Self {
            lower,
            step: (upper - lower) / intervals as Real,
            size: intervals + 1,
        })
    }

    /// Mesh symmetric around zero: `[−half_width, half_width]`.
    pub fn symmetric(half_width: Real, intervals: usize) -> Result<Self> {
        Self::new(-half_width, half_width, intervals)
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Node spacing.
    pub fn step(&self) -> Real {
        self.step
    }

    /// The `j`-th node.
    #[inline]
    pub fn at(&self, j: usize) -> Real {
        self.lower + j as Real * self.step
    }

    /// First node.
    pub fn front(&self) -> Real {
        self.lower
    }

    /// Last node.
    pub fn back(&self) -> Real {
        self.at(self.size - 1)
    }

    /// Index `k` of the first interval with `x_k ≤ x ≤ x_{k+1}`, scanning
    /// upward from the lowest node. `None` if `x` is outside the mesh.
    pub fn bracket(&self, x: Real) -> Option<usize> {
        (0..self.size - 1).find(|&k| x >= self.at(k) && x <= self.at(k + 1))
    }
}

/// Space-time grid of values `u[i, j]`, one row per time layer.
///
/// Stored row-major; row `i` depends on row `i − 1` only, so rows are
/// written once in increasing order.
#[derive(Debug, Clone, PartialEq)]
pub struct FdmGrid {
    rows: usize,
    columns: usize,
    values: Vec<Real>,
}

impl FdmGrid {
    /// Zero-filled grid.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: vec![0.0; rows * columns],
        }
    }

    /// Number of time layers.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of spatial nodes.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `u[i, j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Real {
        self.values[i * self.columns + j]
    }

    /// Time layer `i`.
    pub fn row(&self, i: usize) -> &[Real] {
        &self.values[i * self.columns..(i + 1) * self.columns]
    }

    /// Mutable time layer `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [Real] {
        &mut self.values[i * self.columns..(i + 1) * self.columns]
    }

    /// Previous layer (read) and layer `i` (write) at once.
    ///
    /// # Panics
    /// If `i == 0`.
    pub fn layers_mut(&mut self, i: usize) -> (&[Real], &mut [Real]) {
        assert!(i > 0, "layer 0 has no predecessor");
        let (head, tail) = self.values.split_at_mut(i * self.columns);
        (&head[(i - 1) * self.columns..], &mut tail[..self.columns])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn symmetric_grid_nodes() {
        let g = UniformGrid::symmetric(3.0, 6).unwrap();
        assert_eq!(g.size(), 7);
        assert_abs_diff_eq!(g.step(), 1.0, epsilon = 1e-15);
        let nodes: Vec<Real> = (0..g.size()).map(|j| g.at(j)).collect();
        assert_eq!(nodes, vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(g.back(), 3.0);
    }

    #[test]
    fn bracket_first_interval_wins() {
        let g = UniformGrid::symmetric(3.0, 6).unwrap();
        assert_eq!(g.bracket(-3.0), Some(0));
        assert_eq!(g.bracket(0.5), Some(3));
        // On a node both neighbouring intervals match; the lower one is taken.
        assert_eq!(g.bracket(1.0), Some(3));
        assert_eq!(g.bracket(3.0), Some(5));
        assert_eq!(g.bracket(3.01), None);
        assert_eq!(g.bracket(-3.01), None);
    }

    #[test]
    fn invalid_grids_rejected() {
        assert!(UniformGrid::new(1.0, 1.0, 4).is_err());
        assert!(UniformGrid::new(0.0, 1.0, 0).is_err());
    }

    #[test]
    fn layers_split() {
        let mut u = FdmGrid::zeros(3, 4);
        u.row_mut(0).copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
        {
            let (prev, next) = u.layers_mut(1);
            for (n, p) in next.iter_mut().zip(prev) {
                *n = 2.0 * p;
            }
        }
        assert_eq!(u.row(1), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(u.get(1, 3), 8.0);
        assert_eq!(u.row(2), &[0.0; 4]);
    }
}
