//! European vanilla option quote.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::InstrumentError;

/// European call quote handed to a [`PricingModel`](crate::models::PricingModel).
///
/// Carries the contract terms together with the spot at which it should be
/// valued, so a pricing call needs nothing else.
///
/// # Examples
/// ```
/// use pricer_models::instruments::VanillaOption;
///
/// let option = VanillaOption::new(100.0, 1.0, 105.0).unwrap();
/// assert_eq!(option.strike(), 100.0);
/// assert!((option.payoff(110.0) - 10.0).abs() < 1e-12);
///
/// // Bumped copy for finite differences
/// let bumped = option.with_spot(105.5).unwrap();
/// assert_eq!(bumped.spot(), 105.5);
/// assert_eq!(bumped.strike(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VanillaOption {
    strike: f64,
    expiry: f64,
    spot: f64,
}

impl VanillaOption {
    /// Creates a validated quote.
    ///
    /// # Errors
    /// `InvalidStrike`, `InvalidExpiry` or `InvalidSpot` for non-positive or
    /// non-finite values.
    pub fn new(strike: f64, expiry: f64, spot: f64) -> Result<Self, InstrumentError> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !(expiry.is_finite() && expiry > 0.0) {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }
        if !(spot.is_finite() && spot > 0.0) {
            return Err(InstrumentError::InvalidSpot { spot });
        }
        Ok(Self {
            strike,
            expiry,
            spot,
        })
    }

    /// Same contract valued at a different spot.
    pub fn with_spot(&self, spot: f64) -> Result<Self, InstrumentError> {
        Self::new(self.strike, self.expiry, spot)
    }

    /// Strike price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Spot price of the underlying.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Call payoff max(S − K, 0).
    #[inline]
    pub fn payoff(&self, spot: f64) -> f64 {
        (spot - self.strike).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let option = VanillaOption::new(100.0, 0.5, 95.0).unwrap();
        assert_eq!(option.strike(), 100.0);
        assert_eq!(option.expiry(), 0.5);
        assert_eq!(option.spot(), 95.0);
    }

    #[test]
    fn test_new_rejects_invalid_terms() {
        assert_eq!(
            VanillaOption::new(0.0, 1.0, 100.0),
            Err(InstrumentError::InvalidStrike { strike: 0.0 })
        );
        assert_eq!(
            VanillaOption::new(100.0, -1.0, 100.0),
            Err(InstrumentError::InvalidExpiry { expiry: -1.0 })
        );
        assert!(matches!(
            VanillaOption::new(100.0, 1.0, f64::NAN),
            Err(InstrumentError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_with_spot_validates() {
        let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
        assert!(option.with_spot(-0.01).is_err());
        assert_eq!(option.with_spot(100.01).unwrap().spot(), 100.01);
    }

    #[test]
    fn test_payoff() {
        let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
        assert_eq!(option.payoff(90.0), 0.0);
        assert_eq!(option.payoff(100.0), 0.0);
        assert_eq!(option.payoff(125.0), 25.0);
    }
}
