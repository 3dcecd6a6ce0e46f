//! Heston stochastic-volatility model parameters.
//!
//! Risk-neutral dynamics:
//! ```text
//! dS = r * S * dt + sqrt(v) * S * dW_S
//! dv = kappa * (theta - v) * dt + sigma * sqrt(v) * dW_v
//! E[dW_S * dW_v] = rho * dt
//! ```
//!
//! ## Feller condition
//!
//! Sufficient for the variance to stay strictly positive:
//! ```text
//! 2 * kappa * theta > sigma^2
//! ```
//! Violating it is legal; the PDE grid simply has mass near `v = 0`.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::heston::HestonParams;
//!
//! let params = HestonParams::new(
//!     2.0,   // kappa: mean-reversion speed
//!     0.04,  // theta: long-run variance
//!     0.3,   // sigma: vol-of-vol
//!     -0.6,  // rho: spot/variance correlation
//!     0.04,  // v0: initial variance
//!     0.03,  // r: risk-free rate
//! )
//! .unwrap();
//! assert!(params.satisfies_feller());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pricer_core::types::PricingError;
use thiserror::Error;

/// Heston parameter validation errors.
///
/// ```
/// use pricer_models::models::heston::HestonError;
///
/// let err = HestonError::InvalidRho(1.5);
/// assert!(format!("{}", err).contains("1.5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HestonError {
    /// Mean-reversion speed must be positive.
    #[error("Invalid mean-reversion speed: kappa = {0} (must be positive)")]
    InvalidKappa(f64),

    /// Long-run variance must be positive.
    #[error("Invalid long-run variance: theta = {0} (must be positive)")]
    InvalidTheta(f64),

    /// Vol-of-vol must be positive.
    #[error("Invalid vol-of-vol: sigma = {0} (must be positive)")]
    InvalidSigma(f64),

    /// Correlation must lie in [-1, 1].
    #[error("Invalid correlation: rho = {0} (must lie in [-1, 1])")]
    InvalidRho(f64),

    /// Initial variance must be positive.
    #[error("Invalid initial variance: v0 = {0} (must be positive)")]
    InvalidV0(f64),

    /// Rate must be finite.
    #[error("Invalid risk-free rate: r = {0} (must be finite)")]
    InvalidRate(f64),
}

impl From<HestonError> for PricingError {
    fn from(err: HestonError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Heston model parameters.
///
/// Plain `Copy` record: anything that binds to it (a solver, a pricing
/// model) keeps its own copy, so later edits by the caller never leak into
/// a running computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HestonParams {
    /// Mean-reversion speed κ
    pub kappa: f64,
    /// Long-run variance θ
    pub theta: f64,
    /// Volatility of variance σ
    pub sigma: f64,
    /// Correlation ρ between spot and variance shocks
    pub rho: f64,
    /// Initial variance v₀
    pub v0: f64,
    /// Continuously compounded risk-free rate r
    pub r: f64,
}

impl HestonParams {
    /// Creates and validates a parameter set.
    ///
    /// # Errors
    /// See [`HestonParams::validate`].
    pub fn new(
        kappa: f64,
        theta: f64,
        sigma: f64,
        rho: f64,
        v0: f64,
        r: f64,
    ) -> Result<Self, HestonError> {
        let params = Self {
            kappa,
            theta,
            sigma,
            rho,
            v0,
            r,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field. NaN fails every check.
    ///
    /// # Errors
    /// The first offending field, in declaration order.
    pub fn validate(&self) -> Result<(), HestonError> {
        if !(self.kappa.is_finite() && self.kappa > 0.0) {
            return Err(HestonError::InvalidKappa(self.kappa));
        }
        if !(self.theta.is_finite() && self.theta > 0.0) {
            return Err(HestonError::InvalidTheta(self.theta));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(HestonError::InvalidSigma(self.sigma));
        }
        if !(-1.0..=1.0).contains(&self.rho) {
            return Err(HestonError::InvalidRho(self.rho));
        }
        if !(self.v0.is_finite() && self.v0 > 0.0) {
            return Err(HestonError::InvalidV0(self.v0));
        }
        if !self.r.is_finite() {
            return Err(HestonError::InvalidRate(self.r));
        }
        Ok(())
    }

    /// Feller condition `2κθ > σ²`.
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.kappa * self.theta > self.sigma * self.sigma
    }

    /// Feller ratio `2κθ / σ²`; at least 1 when the condition holds.
    pub fn feller_ratio(&self) -> f64 {
        let denominator = self.sigma * self.sigma;
        if denominator > 0.0 {
            2.0 * self.kappa * self.theta / denominator
        } else {
            f64::INFINITY
        }
    }

    /// Instantaneous volatility √v₀.
    pub fn initial_volatility(&self) -> f64 {
        self.v0.sqrt()
    }
}
