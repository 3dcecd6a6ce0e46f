//! Solver settings: time-stepping scheme and variance read-out.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PdeError;

/// Default implicitness of the Douglas scheme.
pub const DEFAULT_DOUGLAS_THETA: f64 = 0.5;

/// Backward time-stepping scheme.
///
/// # Examples
/// ```
/// use pricer_pricing::pde::AdiScheme;
///
/// assert_eq!(AdiScheme::default(), AdiScheme::PriceOnly);
/// assert!(AdiScheme::Douglas { theta: 0.5 }.validate().is_ok());
/// assert!(AdiScheme::Douglas { theta: 0.2 }.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum AdiScheme {
    /// Fully implicit price-direction step per variance line.
    ///
    /// Variance diffusion, variance drift and the cross term are ignored
    /// and the boundary variance lines are never stepped, so every
    /// variance line evolves as an independent one-factor problem.
    #[default]
    PriceOnly,

    /// Douglas splitting of the full two-factor operator.
    ///
    /// Explicit predictor with every term (cross derivative included),
    /// followed by implicit corrections in price and then variance,
    /// weighted by `theta`.
    Douglas {
        /// Implicitness weight in `[0.5, 1]`
        theta: f64,
    },
}

impl AdiScheme {
    /// Douglas scheme with the default weight.
    pub fn douglas() -> Self {
        AdiScheme::Douglas {
            theta: DEFAULT_DOUGLAS_THETA,
        }
    }

    /// Checks the Douglas weight; `PriceOnly` is always valid.
    ///
    /// # Errors
    /// `PdeError::InvalidConfiguration` if `theta` lies outside `[0.5, 1]`.
    pub fn validate(&self) -> Result<(), PdeError> {
        match *self {
            AdiScheme::PriceOnly => Ok(()),
            AdiScheme::Douglas { theta } => {
                if (0.5..=1.0).contains(&theta) {
                    Ok(())
                } else {
                    Err(PdeError::InvalidConfiguration(format!(
                        "Douglas theta must lie in [0.5, 1], got {}",
                        theta
                    )))
                }
            }
        }
    }
}

/// How the price is read off the variance axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VarianceSelection {
    /// Line `j = clamp(⌊v0·(Nv−1)⌋, 0, Nv−2)`.
    ///
    /// Picks the line by its position on `[0, 1]`, not by its variance
    /// value, so on a stretched axis the line generally does not sit at v0.
    #[default]
    GridPosition,

    /// Locate v0 on the variance axis and interpolate bilinearly.
    Bilinear,
}

/// Scheme and read-out settings for [`BarrierAdiSolver`](super::BarrierAdiSolver).
///
/// # Examples
/// ```
/// use pricer_pricing::pde::{AdiScheme, SolverSettings, VarianceSelection};
///
/// let settings = SolverSettings::default()
///     .with_scheme(AdiScheme::douglas())
///     .with_variance_selection(VarianceSelection::Bilinear);
/// assert_eq!(settings.scheme, AdiScheme::Douglas { theta: 0.5 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverSettings {
    /// Time-stepping scheme
    #[cfg_attr(feature = "serde", serde(default))]
    pub scheme: AdiScheme,
    /// Variance read-out
    #[cfg_attr(feature = "serde", serde(default))]
    pub variance_selection: VarianceSelection,
}

impl SolverSettings {
    /// Replaces the scheme.
    pub fn with_scheme(mut self, scheme: AdiScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Replaces the variance read-out.
    pub fn with_variance_selection(mut self, variance_selection: VarianceSelection) -> Self {
        self.variance_selection = variance_selection;
        self
    }
}
