//! Finite-difference Heston PDE engine for down-and-out barrier calls.
//!
//! The backward Heston PDE for the option value `V(S, v, τ)`
//!
//! ```text
//! ∂V/∂τ = ½vS²·V_SS + ρσvS·V_Sv + ½σ²v·V_vv + rS·V_S + κ(θ − v)·V_v − rV
//! ```
//!
//! is solved on a stretched `(S, v)` grid from the terminal payoff back to
//! today, with the value forced to zero at and below the barrier.
//!
//! ## Components
//!
//! - [`Grid2D`]: immutable, shareable grid
//! - [`HestonPde`]: pointwise operator coefficients
//! - [`BarrierAdiSolver`]: value surface, time stepping and read-out
//! - [`PdeConfig`]: serialisable run description
//!
//! ## Schemes
//!
//! [`AdiScheme::PriceOnly`] reproduces the historical numerics: a fully
//! implicit price step per interior variance line, nothing else.
//! [`AdiScheme::Douglas`] solves the full two-factor operator.
//!
//! # Examples
//! ```
//! use pricer_models::instruments::BarrierOption;
//! use pricer_models::models::HestonParams;
//! use pricer_pricing::pde::{
//!     AdiScheme, BarrierAdiSolver, Grid2D, SolverSettings, VarianceSelection,
//! };
//!
//! let grid = Grid2D::new(50.0, 150.0, 61, 0.0, 1.0, 31).unwrap();
//! let params = HestonParams::new(2.0, 0.04, 0.3, -0.6, 0.04, 0.03).unwrap();
//! let contract = BarrierOption::new(100.0, 50.0, 1.0).unwrap();
//! let settings = SolverSettings::default()
//!     .with_scheme(AdiScheme::douglas())
//!     .with_variance_selection(VarianceSelection::Bilinear);
//!
//! let mut solver =
//!     BarrierAdiSolver::with_settings(&grid, &params, contract, 50, settings).unwrap();
//! let price = solver.price_down_and_out_call(100.0).unwrap();
//! assert!(price > 0.0 && price < 20.0);
//! ```

mod coefficients;
mod config;
mod douglas;
mod error;
mod grid;
mod settings;
mod solver;
mod stencil;
mod stepping;

pub use coefficients::{HestonPde, PdeCoefficients};
pub use config::{GridConfig, PdeConfig, MAX_TIME_STEPS};
pub use error::PdeError;
pub use grid::{Grid2D, Stretch, MIN_AXIS_POINTS};
pub use settings::{AdiScheme, SolverSettings, VarianceSelection, DEFAULT_DOUGLAS_THETA};
pub use solver::{BarrierAdiSolver, SolverState};
