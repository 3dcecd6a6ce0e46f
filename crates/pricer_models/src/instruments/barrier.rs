//! Down-and-out barrier call contract.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::InstrumentError;

/// Down-and-out barrier call: pays `max(S_T − K, 0)` unless the underlying
/// touched or fell below the barrier `B` before maturity.
///
/// # Examples
/// ```
/// use pricer_models::instruments::BarrierOption;
///
/// let option = BarrierOption::new(100.0, 50.0, 1.0).unwrap();
/// assert_eq!(option.terminal_payoff(120.0), 20.0);
/// assert_eq!(option.terminal_payoff(50.0), 0.0);
/// assert!(option.is_knocked_out(49.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BarrierOption {
    strike: f64,
    barrier: f64,
    maturity: f64,
}

impl BarrierOption {
    /// Creates a validated contract.
    ///
    /// A barrier of zero is legal and degenerates into a vanilla call.
    ///
    /// # Errors
    /// `InvalidStrike` / `InvalidExpiry` for non-positive or non-finite
    /// strike or maturity, `InvalidBarrier` for a negative or non-finite
    /// barrier.
    pub fn new(strike: f64, barrier: f64, maturity: f64) -> Result<Self, InstrumentError> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !(barrier.is_finite() && barrier >= 0.0) {
            return Err(InstrumentError::InvalidBarrier { barrier });
        }
        if !(maturity.is_finite() && maturity > 0.0) {
            return Err(InstrumentError::InvalidExpiry { expiry: maturity });
        }
        Ok(Self {
            strike,
            barrier,
            maturity,
        })
    }

    /// Strike price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Barrier level B.
    #[inline]
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    /// Maturity T in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// True at or below the barrier.
    #[inline]
    pub fn is_knocked_out(&self, spot: f64) -> bool {
        spot <= self.barrier
    }

    /// Value at maturity: the call payoff above the barrier, zero at or below it.
    #[inline]
    pub fn terminal_payoff(&self, spot: f64) -> f64 {
        if self.is_knocked_out(spot) {
            0.0
        } else {
            (spot - self.strike).max(0.0)
        }
    }
}
