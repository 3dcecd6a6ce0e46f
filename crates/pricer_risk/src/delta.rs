//! Spot delta by bump-and-revalue.

use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;
use pricer_models::models::PricingModel;
use pricer_pricing::PricingEngine;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default absolute spot bump.
pub const DEFAULT_SPOT_BUMP: f64 = 0.01;

/// Risk configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Bump must be finite and positive.
    #[error("Invalid spot bump: {bump} (must be finite and positive)")]
    InvalidBump {
        /// Rejected bump
        bump: f64,
    },
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Finite-difference scheme for delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeltaMethod {
    /// `(P(S + h) − P(S)) / h`
    #[default]
    Forward,
    /// `(P(S + h) − P(S − h)) / 2h`
    Central,
}

/// Bump size and scheme.
///
/// Deserialising goes through [`DeltaConfig::new`], so a parsed
/// configuration is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDeltaConfig"))]
pub struct DeltaConfig {
    bump: f64,
    method: DeltaMethod,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawDeltaConfig {
    #[serde(default = "default_bump")]
    bump: f64,
    #[serde(default)]
    method: DeltaMethod,
}

#[cfg(feature = "serde")]
fn default_bump() -> f64 {
    DEFAULT_SPOT_BUMP
}

#[cfg(feature = "serde")]
impl TryFrom<RawDeltaConfig> for DeltaConfig {
    type Error = RiskError;

    fn try_from(raw: RawDeltaConfig) -> Result<Self, Self::Error> {
        DeltaConfig::new(raw.bump, raw.method)
    }
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            bump: DEFAULT_SPOT_BUMP,
            method: DeltaMethod::Forward,
        }
    }
}

impl DeltaConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// `RiskError::InvalidBump` if `bump` is not finite and positive.
    pub fn new(bump: f64, method: DeltaMethod) -> Result<Self, RiskError> {
        if !(bump.is_finite() && bump > 0.0) {
            return Err(RiskError::InvalidBump { bump });
        }
        Ok(Self { bump, method })
    }

    /// Absolute spot bump `h`.
    pub fn bump(&self) -> f64 {
        self.bump
    }

    /// Difference scheme.
    pub fn method(&self) -> DeltaMethod {
        self.method
    }
}

/// Computes sensitivities through a borrowed [`PricingEngine`].
pub struct RiskEngine<'e, 'm, M: PricingModel + ?Sized> {
    engine: &'e PricingEngine<'m, M>,
    config: DeltaConfig,
}

impl<'e, 'm, M: PricingModel + ?Sized> RiskEngine<'e, 'm, M> {
    /// Risk engine with the default forward bump of [`DEFAULT_SPOT_BUMP`].
    pub fn new(engine: &'e PricingEngine<'m, M>) -> Self {
        Self::with_config(engine, DeltaConfig::default())
    }

    /// Risk engine with an explicit configuration.
    pub fn with_config(engine: &'e PricingEngine<'m, M>, config: DeltaConfig) -> Self {
        Self { engine, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &DeltaConfig {
        &self.config
    }

    /// Spot delta of `option`.
    ///
    /// # Errors
    /// Any pricing failure, including bumped spots that leave the model's
    /// domain.
    pub fn delta(&self, option: &VanillaOption) -> Result<f64, PricingError> {
        let h = self.config.bump;
        let up = self.engine.price_option(&option.with_spot(option.spot() + h)?)?;

        match self.config.method {
            DeltaMethod::Forward => {
                let base = self.engine.price_option(option)?;
                Ok((up - base) / h)
            }
            DeltaMethod::Central => {
                let down = self
                    .engine
                    .price_option(&option.with_spot(option.spot() - h)?)?;
                Ok((up - down) / (2.0 * h))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::analytical::BlackScholes;
    use pricer_models::models::BlackScholesModel;
    use proptest::prelude::*;

    #[test]
    fn test_default_config() {
        let config = DeltaConfig::default();
        assert_eq!(config.bump(), 0.01);
        assert_eq!(config.method(), DeltaMethod::Forward);
    }

    #[test]
    fn test_rejects_bad_bumps() {
        for bump in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            assert!(DeltaConfig::new(bump, DeltaMethod::Forward).is_err());
        }
        let err: PricingError = RiskError::InvalidBump { bump: 0.0 }.into();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn test_forward_delta_matches_closed_form() {
        let model = BlackScholesModel::new(0.05, 0.2).unwrap();
        let engine = PricingEngine::new(&model);
        let risk = RiskEngine::new(&engine);

        let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
        let expected = BlackScholes::new(100.0, 0.05, 0.2)
            .unwrap()
            .call_delta(100.0, 1.0);
        assert_relative_eq!(risk.delta(&option).unwrap(), expected, epsilon = 1e-3);
    }

    #[test]
    fn test_central_delta_is_tighter() {
        let model = BlackScholesModel::new(0.05, 0.2).unwrap();
        let engine = PricingEngine::new(&model);
        let config = DeltaConfig::new(0.5, DeltaMethod::Central).unwrap();
        let risk = RiskEngine::with_config(&engine, config);

        let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
        let expected = BlackScholes::new(100.0, 0.05, 0.2)
            .unwrap()
            .call_delta(100.0, 1.0);
        assert_relative_eq!(risk.delta(&option).unwrap(), expected, epsilon = 1e-4);
    }

    #[test]
    fn test_bump_below_zero_spot_fails() {
        let model = BlackScholesModel::default();
        let engine = PricingEngine::new(&model);
        let config = DeltaConfig::new(2.0, DeltaMethod::Central).unwrap();
        let risk = RiskEngine::with_config(&engine, config);

        let option = VanillaOption::new(100.0, 1.0, 1.0).unwrap();
        assert!(matches!(
            risk.delta(&option),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialised_config_is_validated() {
        let config: DeltaConfig = toml::from_str("bump = 0.5\nmethod = \"central\"").unwrap();
        assert_eq!(config, DeltaConfig::new(0.5, DeltaMethod::Central).unwrap());

        let config: DeltaConfig = toml::from_str("").unwrap();
        assert_eq!(config, DeltaConfig::default());

        for bad in ["bump = 0.0", "bump = -0.01", "bump = nan", "bump = inf"] {
            let err = toml::from_str::<DeltaConfig>(bad).unwrap_err();
            assert!(err.to_string().contains("Invalid spot bump"), "{}", err);
        }
    }

    proptest! {
        #[test]
        fn prop_call_delta_in_unit_interval(spot in 50.0f64..150.0, strike in 50.0f64..150.0) {
            let model = BlackScholesModel::default();
            let engine = PricingEngine::new(&model);
            let config = DeltaConfig::new(0.01, DeltaMethod::Central).unwrap();
            let risk = RiskEngine::with_config(&engine, config);

            let option = VanillaOption::new(strike, 1.0, spot).unwrap();
            let delta = risk.delta(&option).unwrap();
            prop_assert!(delta > -1e-4 && delta < 1.0 + 1e-4);
        }
    }
}
