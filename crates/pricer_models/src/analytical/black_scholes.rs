//! Black-Scholes closed form for European options.
//!
//! **Call**: C = S·N(d₁) − K·e^(−rT)·N(d₂)
//! **Put**: P = K·e^(−rT)·N(−d₂) − S·N(−d₁)
//!
//! with d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T) and d₂ = d₁ − σ√T.

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Expiries at or below this are treated as already expired.
const EXPIRY_EPSILON: f64 = 1e-12;

/// Black-Scholes model bound to a spot, rate and volatility.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K·exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot is not positive and finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility is not positive and finite
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate });
        }
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        ((self.spot / strike).ln() + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ − σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price. Returns intrinsic value once expired.
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (self.spot - strike).max(0.0);
        }
        let df = (-self.rate * expiry).exp();
        self.spot * norm_cdf(self.d1(strike, expiry))
            - strike * df * norm_cdf(self.d2(strike, expiry))
    }

    /// European put price. Returns intrinsic value once expired.
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (strike - self.spot).max(0.0);
        }
        let df = (-self.rate * expiry).exp();
        strike * df * norm_cdf(-self.d2(strike, expiry))
            - self.spot * norm_cdf(-self.d1(strike, expiry))
    }

    /// Call delta, N(d₁).
    pub fn call_delta(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return if self.spot > strike { 1.0 } else { 0.0 };
        }
        norm_cdf(self.d1(strike, expiry))
    }

    /// Gamma, φ(d₁) / (S·σ·√T). Identical for calls and puts.
    pub fn gamma(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }
        norm_pdf(self.d1(strike, expiry)) / (self.spot * self.volatility * expiry.sqrt())
    }
}
