//! Error types for the PDE engine.

use pricer_core::types::{PricingError, SolverError};
use pricer_models::models::HestonError;
use thiserror::Error;

/// PDE engine errors.
///
/// Configuration problems are reported at construction. Numerical problems
/// are reported by the step that detects them and leave the solver in the
/// failed state.
///
/// # Examples
/// ```
/// use pricer_pricing::pde::PdeError;
///
/// let err = PdeError::OutOfDomain { spot: 200.0, min: 50.0, max: 150.0 };
/// assert!(err.to_string().contains("200"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PdeError {
    /// Grid sizes, bounds or stretch factors are unusable.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Contract, step count or solver settings are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Heston parameters failed validation.
    #[error("Invalid model parameters: {0}")]
    InvalidModel(#[from] HestonError),

    /// A tridiagonal solve broke down.
    #[error("Numerical instability at step {step}, slice {slice}: {source}")]
    NumericalInstability {
        /// 1-based index of the failing time step
        step: usize,
        /// Grid line being solved (variance index for price sweeps, price
        /// index for variance sweeps)
        slice: usize,
        /// Underlying solver failure
        source: SolverError,
    },

    /// Queried spot lies outside the price axis.
    #[error("Spot {spot} outside price grid [{min}, {max}]")]
    OutOfDomain {
        /// Requested spot
        spot: f64,
        /// Lowest grid price
        min: f64,
        /// Highest grid price
        max: f64,
    },

    /// Every configured time step has already been applied.
    #[error("All time steps have already been applied")]
    StepsExhausted,

    /// An earlier step failed; the surface is no longer usable.
    #[error("Solver failed on an earlier step and cannot be reused")]
    SolverFailed,
}

impl From<PdeError> for PricingError {
    fn from(err: PdeError) -> Self {
        match err {
            PdeError::InvalidGrid(_)
            | PdeError::InvalidConfiguration(_)
            | PdeError::InvalidModel(_)
            | PdeError::OutOfDomain { .. } => PricingError::InvalidInput(err.to_string()),
            PdeError::NumericalInstability { .. } | PdeError::SolverFailed => {
                PricingError::NumericalInstability(err.to_string())
            }
            PdeError::StepsExhausted => PricingError::ModelFailure(err.to_string()),
        }
    }
}
