//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `SolverError`: Errors from linear-system solvers

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Every layer-specific error
/// in the workspace converts into this type.
///
/// # Variants
/// - `InvalidInput`: Invalid market data, contract terms or grid configuration
/// - `NumericalInstability`: A time step or linear solve broke down
/// - `ModelFailure`: Model assumptions violated
/// - `UnsupportedInstrument`: Instrument type not supported by model
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),

    /// Model failed to produce valid result
    ModelFailure(String),

    /// Instrument type not supported
    UnsupportedInstrument(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::ModelFailure(msg) => write!(f, "Model failure: {}", msg),
            PricingError::UnsupportedInstrument(msg) => {
                write!(f, "Unsupported instrument: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Linear-system solver errors.
///
/// Provides structured error handling for the tridiagonal solver
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `ZeroPivot`: Forward elimination hit a (near) zero pivot
/// - `DimensionMismatch`: Diagonal, off-diagonal and right-hand-side lengths differ
/// - `NumericalInstability`: The solution contains NaN or infinite entries
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::ZeroPivot { index: 3, pivot: 0.0 };
/// assert!(format!("{}", err).contains("row 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Pivot magnitude below tolerance during forward elimination.
    #[error("Zero pivot at row {index}: {pivot:e}")]
    ZeroPivot {
        /// Row at which elimination broke down
        index: usize,
        /// The offending pivot value
        pivot: f64,
    },

    /// Input slices have inconsistent lengths.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Length of the main diagonal
        expected: usize,
        /// Length of the offending slice
        got: usize,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::DimensionMismatch { .. } => PricingError::InvalidInput(err.to_string()),
            SolverError::ZeroPivot { .. } | SolverError::NumericalInstability(_) => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}
