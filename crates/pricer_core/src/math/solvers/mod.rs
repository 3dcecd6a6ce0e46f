//! Linear-system solvers for finite-difference time stepping.
//!
//! Implicit and ADI schemes reduce every one-dimensional sweep to a
//! tridiagonal system. This module provides the Thomas algorithm in two
//! flavours:
//!
//! - [`solve_tridiagonal`]: allocating convenience function
//! - [`TridiagonalSolver`]: reusable scratch buffers for per-row sweeps
//!
//! ## Configuration
//!
//! Both use [`SolverConfig`] for configuring:
//! - `pivot_tolerance`: Smallest accepted pivot magnitude (default: 1e-14)
//!
//! ## Failure Modes
//!
//! The Thomas algorithm has no pivoting. Diagonally dominant systems are
//! always safe; anything else may break down, in which case the solver
//! reports [`SolverError::ZeroPivot`](crate::types::SolverError::ZeroPivot)
//! instead of returning NaN.
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{SolverConfig, TridiagonalSolver};
//!
//! let mut solver = TridiagonalSolver::new(SolverConfig::default());
//! let mut x = vec![0.0; 3];
//!
//! solver
//!     .solve_into(&[0.0, -1.0, -1.0], &[4.0, 4.0, 4.0], &[-1.0, -1.0, 0.0], &[3.0, 2.0, 3.0], &mut x)
//!     .unwrap();
//! assert!((x[1] - 1.0_f64).abs() < 1e-12);
//! ```

mod config;
mod tridiagonal;

// Re-export public types at module level
pub use config::SolverConfig;
pub use tridiagonal::{solve_tridiagonal, TridiagonalSolver};
