//! Solver configuration types.

use num_traits::Float;

/// Configuration for the tridiagonal solver.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.pivot_tolerance < 1e-12);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     pivot_tolerance: 1e-10,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Smallest accepted pivot magnitude during forward elimination.
    ///
    /// Elimination stops with `SolverError::ZeroPivot` when
    /// `|b[i] - a[i] * c'[i-1]| <= pivot_tolerance`.
    pub pivot_tolerance: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `pivot_tolerance`: 1e-14
    fn default() -> Self {
        Self {
            pivot_tolerance: T::from(1e-14).unwrap_or_else(T::epsilon),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with the specified pivot tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `pivot_tolerance < 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12);
    /// assert_eq!(config.pivot_tolerance, 1e-12);
    /// ```
    pub fn new(pivot_tolerance: T) -> Self {
        assert!(
            pivot_tolerance >= T::zero(),
            "pivot_tolerance must be non-negative"
        );
        Self { pivot_tolerance }
    }
}
