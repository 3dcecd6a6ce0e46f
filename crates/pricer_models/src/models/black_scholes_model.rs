//! Closed-form Black-Scholes pricing model.

use pricer_core::types::PricingError;

use super::PricingModel;
use crate::analytical::BlackScholes;
use crate::instruments::VanillaOption;

/// Black-Scholes [`PricingModel`] with flat rate and volatility.
///
/// Needs nothing beyond rate and volatility; strike, expiry and spot come
/// from the quote.
///
/// # Examples
/// ```
/// use pricer_models::instruments::VanillaOption;
/// use pricer_models::models::{BlackScholesModel, PricingModel};
///
/// let model = BlackScholesModel::default();
/// let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
/// let price = model.price_option(&option).unwrap();
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesModel {
    rate: f64,
    volatility: f64,
}

impl BlackScholesModel {
    /// Creates a model, rejecting non-finite rate or non-positive volatility.
    pub fn new(rate: f64, volatility: f64) -> Result<Self, PricingError> {
        // Validate through the analytical layer with a dummy spot.
        BlackScholes::new(1.0, rate, volatility)?;
        Ok(Self { rate, volatility })
    }

    /// Risk-free rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility.
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

impl Default for BlackScholesModel {
    /// r = 5%, σ = 20%.
    fn default() -> Self {
        Self {
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl PricingModel for BlackScholesModel {
    fn price_option(&self, option: &VanillaOption) -> Result<f64, PricingError> {
        let bs = BlackScholes::new(option.spot(), self.rate, self.volatility)?;
        Ok(bs.price_call(option.strike(), option.expiry()))
    }

    fn name(&self) -> &str {
        "black-scholes"
    }
}
