//! Pricing engine façade over any [`PricingModel`].
//!
//! The engine borrows its model (`&'m M`) rather than owning it, so one
//! model can back several engines and the caller decides its lifetime.
//!
//! # Example
//!
//! ```rust
//! use pricer_models::instruments::VanillaOption;
//! use pricer_models::models::BlackScholesModel;
//! use pricer_pricing::PricingEngine;
//!
//! let model = BlackScholesModel::default();
//! let engine = PricingEngine::new(&model);
//! let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
//! assert!(engine.price_option(&option).unwrap() > 0.0);
//! ```

use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;
use pricer_models::models::PricingModel;
use tracing::debug;

/// Non-owning façade that forwards pricing requests to a model.
#[derive(Debug)]
pub struct PricingEngine<'m, M: PricingModel + ?Sized> {
    model: &'m M,
}

impl<'m, M: PricingModel + ?Sized> Clone for PricingEngine<'m, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'m, M: PricingModel + ?Sized> Copy for PricingEngine<'m, M> {}

impl<'m, M: PricingModel + ?Sized> PricingEngine<'m, M> {
    /// Wraps a borrowed model.
    pub fn new(model: &'m M) -> Self {
        Self { model }
    }

    /// Borrowed model.
    pub fn model(&self) -> &'m M {
        self.model
    }

    /// Prices `option` with the bound model.
    ///
    /// # Errors
    /// Whatever the model reports.
    pub fn price_option(&self, option: &VanillaOption) -> Result<f64, PricingError> {
        let price = self.model.price_option(option)?;
        debug!(
            model = self.model.name(),
            strike = option.strike(),
            expiry = option.expiry(),
            spot = option.spot(),
            price,
            "option priced"
        );
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::analytical::BlackScholes;
    use pricer_models::models::BlackScholesModel;

    struct Failing;

    impl PricingModel for Failing {
        fn price_option(&self, _option: &VanillaOption) -> Result<f64, PricingError> {
            Err(PricingError::ModelFailure("always fails".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_forwards_to_model() {
        let model = BlackScholesModel::new(0.05, 0.2).unwrap();
        let engine = PricingEngine::new(&model);
        let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();

        let expected = BlackScholes::new(100.0, 0.05, 0.2)
            .unwrap()
            .price_call(100.0, 1.0);
        assert_relative_eq!(engine.price_option(&option).unwrap(), expected);
    }

    #[test]
    fn test_trait_object_model() {
        let model = BlackScholesModel::default();
        let dynamic: &dyn PricingModel = &model;
        let engine = PricingEngine::new(dynamic);
        assert_eq!(engine.model().name(), "black-scholes");
    }

    #[test]
    fn test_propagates_model_errors() {
        let engine = PricingEngine::new(&Failing);
        let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
        assert_eq!(
            engine.price_option(&option),
            Err(PricingError::ModelFailure("always fails".to_string()))
        );
    }
}
