//! Error types for closed-form pricing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Closed-form pricing errors.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Volatility is non-positive or not finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Spot price is non-positive or not finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Interest rate is not finite.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_rate_display() {
        let err = AnalyticalError::InvalidRate { rate: f64::NAN };
        assert_eq!(format!("{}", err), "Invalid rate: r = NaN");
    }

    #[test]
    fn test_conversion_to_pricing_error() {
        let err: PricingError = AnalyticalError::InvalidSpot { spot: 0.0 }.into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("spot")),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
