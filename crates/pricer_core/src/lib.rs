//! # pricer_core: Numerical Foundation for the Heston PDE Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Linear-system kernels for finite-difference time stepping (`math::solvers`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::solve_tridiagonal;
//!
//! // | 2 1 0 | |x0|   |3|
//! // | 1 2 1 | |x1| = |4|
//! // | 0 1 2 | |x2|   |3|
//! let lower = [0.0, 1.0, 1.0];
//! let diag = [2.0, 2.0, 2.0];
//! let upper = [1.0, 1.0, 0.0];
//! let rhs = [3.0, 4.0, 3.0];
//!
//! let x = solve_tridiagonal(&lower, &diag, &upper, &rhs).unwrap();
//! # assert!((x[0] - 1.0_f64).abs() < 1e-12);
//! # assert!((x[1] - 1.0_f64).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
