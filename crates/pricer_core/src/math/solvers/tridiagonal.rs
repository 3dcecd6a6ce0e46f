//! Thomas algorithm for tridiagonal systems.
//!
//! Solves `a[i]·x[i-1] + b[i]·x[i] + c[i]·x[i+1] = d[i]` for `i = 0..n`,
//! where `a[0]` and `c[n-1]` are ignored.
//!
//! ## Algorithm
//!
//! ```text
//! c'[0] = c[0] / b[0]
//! d'[0] = d[0] / b[0]
//! denom = b[i] - a[i]·c'[i-1]
//! c'[i] = c[i] / denom
//! d'[i] = (d[i] - a[i]·d'[i-1]) / denom
//!
//! x[n-1] = d'[n-1]
//! x[i]   = d'[i] - c'[i]·x[i+1]
//! ```
//!
//! Runs in O(n) time and O(n) scratch space.

use num_traits::Float;

use super::config::SolverConfig;
use crate::types::SolverError;

/// Reusable Thomas-algorithm solver.
///
/// Owns the normalised super-diagonal and right-hand-side buffers so that
/// repeated sweeps over rows of the same length allocate only once.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{SolverConfig, TridiagonalSolver};
///
/// let mut solver = TridiagonalSolver::with_capacity(4, SolverConfig::default());
/// let mut x = vec![0.0; 4];
///
/// let lower = [0.0, 1.0, 1.0, 1.0];
/// let diag = [4.0, 4.0, 4.0, 4.0];
/// let upper = [1.0, 1.0, 1.0, 0.0];
/// let rhs = [5.0, 6.0, 6.0, 5.0];
///
/// solver.solve_into(&lower, &diag, &upper, &rhs, &mut x).unwrap();
/// for xi in &x {
///     assert!((xi - 1.0_f64).abs() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TridiagonalSolver<T: Float> {
    config: SolverConfig<T>,
    c_prime: Vec<T>,
    d_prime: Vec<T>,
}

impl<T: Float> TridiagonalSolver<T> {
    /// Creates a solver with empty scratch buffers.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            c_prime: Vec::new(),
            d_prime: Vec::new(),
        }
    }

    /// Creates a solver with scratch buffers sized for systems of length `n`.
    pub fn with_capacity(n: usize, config: SolverConfig<T>) -> Self {
        Self {
            config,
            c_prime: Vec::with_capacity(n),
            d_prime: Vec::with_capacity(n),
        }
    }

    /// Returns the solver configuration.
    #[inline]
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Solves the system and writes the solution into `out`.
    ///
    /// # Arguments
    ///
    /// * `lower` - Sub-diagonal `a` (entry 0 unused)
    /// * `diag` - Main diagonal `b`
    /// * `upper` - Super-diagonal `c` (entry n-1 unused)
    /// * `rhs` - Right-hand side `d`
    /// * `out` - Solution buffer `x`
    ///
    /// # Errors
    ///
    /// - `SolverError::DimensionMismatch` if any slice length differs from `diag`
    /// - `SolverError::ZeroPivot` if a pivot magnitude is at or below tolerance
    /// - `SolverError::NumericalInstability` if the solution is not finite
    pub fn solve_into(
        &mut self,
        lower: &[T],
        diag: &[T],
        upper: &[T],
        rhs: &[T],
        out: &mut [T],
    ) -> Result<(), SolverError> {
        let n = diag.len();
        for len in [lower.len(), upper.len(), rhs.len(), out.len()] {
            if len != n {
                return Err(SolverError::DimensionMismatch {
                    expected: n,
                    got: len,
                });
            }
        }
        if n == 0 {
            return Ok(());
        }

        self.c_prime.clear();
        self.d_prime.clear();
        self.c_prime.resize(n, T::zero());
        self.d_prime.resize(n, T::zero());

        let pivot = self.check_pivot(0, diag[0])?;
        self.c_prime[0] = upper[0] / pivot;
        self.d_prime[0] = rhs[0] / pivot;

        for i in 1..n {
            let denom = self.check_pivot(i, diag[i] - lower[i] * self.c_prime[i - 1])?;
            self.c_prime[i] = upper[i] / denom;
            self.d_prime[i] = (rhs[i] - lower[i] * self.d_prime[i - 1]) / denom;
        }

        out[n - 1] = self.d_prime[n - 1];
        for i in (0..n - 1).rev() {
            out[i] = self.d_prime[i] - self.c_prime[i] * out[i + 1];
        }

        if let Some(index) = out.iter().position(|x| !x.is_finite()) {
            return Err(SolverError::NumericalInstability(format!(
                "non-finite solution at row {}",
                index
            )));
        }

        Ok(())
    }

    #[inline]
    fn check_pivot(&self, index: usize, pivot: T) -> Result<T, SolverError> {
        // NaN pivots fail the comparison and are rejected too
        if pivot.abs() > self.config.pivot_tolerance {
            Ok(pivot)
        } else {
            Err(SolverError::ZeroPivot {
                index,
                pivot: pivot.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}

impl<T: Float> Default for TridiagonalSolver<T> {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Solves a tridiagonal system with the default configuration.
///
/// Convenience wrapper around [`TridiagonalSolver::solve_into`] that
/// allocates the solution vector.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::solve_tridiagonal;
///
/// let x = solve_tridiagonal(&[0.0, 1.0], &[2.0, 2.0], &[1.0, 0.0], &[3.0, 3.0]).unwrap();
/// assert!((x[0] - 1.0_f64).abs() < 1e-12);
/// assert!((x[1] - 1.0_f64).abs() < 1e-12);
/// ```
pub fn solve_tridiagonal<T: Float>(
    lower: &[T],
    diag: &[T],
    upper: &[T],
    rhs: &[T],
) -> Result<Vec<T>, SolverError> {
    let mut out = vec![T::zero(); diag.len()];
    TridiagonalSolver::default().solve_into(lower, diag, upper, rhs, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Computes `A·x` for the tridiagonal matrix given by its three diagonals.
    fn multiply(lower: &[f64], diag: &[f64], upper: &[f64], x: &[f64]) -> Vec<f64> {
        let n = diag.len();
        (0..n)
            .map(|i| {
                let mut acc = diag[i] * x[i];
                if i > 0 {
                    acc += lower[i] * x[i - 1];
                }
                if i + 1 < n {
                    acc += upper[i] * x[i + 1];
                }
                acc
            })
            .collect()
    }

    #[test]
    fn test_identity_system() {
        let x = solve_tridiagonal(&[0.0; 4], &[1.0; 4], &[0.0; 4], &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(x, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_single_row() {
        let x = solve_tridiagonal(&[0.0], &[4.0], &[0.0], &[2.0]).unwrap();
        assert_abs_diff_eq!(x[0], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_empty_system() {
        let x: Vec<f64> = solve_tridiagonal(&[], &[], &[], &[]).unwrap();
        assert!(x.is_empty());
    }

    #[test]
    fn test_known_solution() {
        // Discrete Laplacian with Dirichlet rows
        let lower = [0.0, -1.0, -1.0, -1.0, 0.0];
        let diag = [1.0, 2.0, 2.0, 2.0, 1.0];
        let upper = [0.0, -1.0, -1.0, -1.0, 0.0];
        let rhs = [0.0, 0.0, 0.0, 0.0, 4.0];

        let x = solve_tridiagonal(&lower, &diag, &upper, &rhs).unwrap();
        for (i, xi) in x.iter().enumerate() {
            assert_abs_diff_eq!(*xi, i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_leading_pivot() {
        let err = solve_tridiagonal(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 0.0], &[0.0, 1.0])
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::ZeroPivot {
                index: 0,
                pivot: 0.0
            }
        );
    }

    #[test]
    fn test_zero_interior_pivot() {
        // Second pivot: 1 - 1 * (1 / 1) = 0
        let err = solve_tridiagonal(&[0.0, 1.0], &[1.0, 1.0], &[1.0, 0.0], &[1.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, SolverError::ZeroPivot { index: 1, .. }));
    }

    #[test]
    fn test_nan_pivot_rejected() {
        let err = solve_tridiagonal(&[0.0], &[f64::NAN], &[0.0], &[1.0]).unwrap_err();
        assert!(matches!(err, SolverError::ZeroPivot { index: 0, .. }));
    }

    #[test]
    fn test_non_finite_rhs_detected() {
        let err = solve_tridiagonal(&[0.0, 0.0], &[1.0, 1.0], &[0.0, 0.0], &[f64::INFINITY, 1.0])
            .unwrap_err();
        assert!(matches!(err, SolverError::NumericalInstability(_)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = solve_tridiagonal(&[0.0, 0.0], &[1.0, 1.0, 1.0], &[0.0; 3], &[1.0; 3])
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::DimensionMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_output_length_mismatch() {
        let mut solver = TridiagonalSolver::default();
        let mut out = vec![0.0; 2];
        let err = solver
            .solve_into(&[0.0; 3], &[1.0; 3], &[0.0; 3], &[1.0; 3], &mut out)
            .unwrap_err();
        assert!(matches!(err, SolverError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_solver_reuse_across_lengths() {
        let mut solver = TridiagonalSolver::with_capacity(2, SolverConfig::default());

        let mut small = vec![0.0; 2];
        solver
            .solve_into(&[0.0, 1.0], &[3.0, 3.0], &[1.0, 0.0], &[4.0, 4.0], &mut small)
            .unwrap();

        let mut large = vec![0.0; 5];
        let lower = [0.0, 1.0, 1.0, 1.0, 1.0];
        let diag = [3.0; 5];
        let upper = [1.0, 1.0, 1.0, 1.0, 0.0];
        let rhs = multiply(&lower, &diag, &upper, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        solver
            .solve_into(&lower, &diag, &upper, &rhs, &mut large)
            .unwrap();

        assert_abs_diff_eq!(small[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(small[1], 1.0, epsilon = 1e-12);
        for (i, xi) in large.iter().enumerate() {
            assert_abs_diff_eq!(*xi, (i + 1) as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_custom_pivot_tolerance() {
        let mut solver = TridiagonalSolver::new(SolverConfig::new(0.5));
        let mut out = vec![0.0; 1];
        let err = solver
            .solve_into(&[0.0], &[0.4], &[0.0], &[1.0], &mut out)
            .unwrap_err();
        assert!(matches!(err, SolverError::ZeroPivot { index: 0, .. }));
    }

    #[test]
    fn test_f32_solve() {
        let x = solve_tridiagonal(&[0.0_f32, 1.0], &[2.0, 2.0], &[1.0, 0.0], &[3.0, 3.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-5);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Random diagonally dominant system of size 1..=64.
        fn dominant_system() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>)> {
            (1usize..=64).prop_flat_map(|n| {
                (
                    prop::collection::vec(-1.0..1.0_f64, n),
                    prop::collection::vec(-1.0..1.0_f64, n),
                    prop::collection::vec(0.1..2.0_f64, n),
                    prop::collection::vec(-100.0..100.0_f64, n),
                )
                    .prop_map(|(lower, upper, margin, rhs)| {
                        let diag = lower
                            .iter()
                            .zip(&upper)
                            .zip(&margin)
                            .map(|((a, c), m)| a.abs() + c.abs() + m)
                            .collect();
                        (lower, diag, upper, rhs)
                    })
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_round_trip_reproduces_rhs(
                (lower, diag, upper, rhs) in dominant_system()
            ) {
                let x = solve_tridiagonal(&lower, &diag, &upper, &rhs).unwrap();
                let back = multiply(&lower, &diag, &upper, &x);

                for (lhs, expected) in back.iter().zip(&rhs) {
                    prop_assert!(
                        (lhs - expected).abs() <= 1e-9 * (1.0 + expected.abs()),
                        "A·x = {} but d = {}", lhs, expected
                    );
                }
            }

            #[test]
            fn test_dominant_systems_never_hit_zero_pivot(
                (lower, diag, upper, rhs) in dominant_system()
            ) {
                prop_assert!(solve_tridiagonal(&lower, &diag, &upper, &rhs).is_ok());
            }
        }
    }
}
