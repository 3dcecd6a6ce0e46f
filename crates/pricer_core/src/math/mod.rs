//! Numerical kernels shared by the pricing layers.
//!
//! - `solvers`: Linear-system solvers used by finite-difference time stepping

pub mod solvers;
