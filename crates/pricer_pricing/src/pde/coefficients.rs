//! Pointwise coefficients of the Heston backward operator.
//!
//! ```text
//! ∂V/∂τ = dSS·V_SS + dVV·V_vv + dSV·V_Sv + dS·V_S + dV·V_v + rTerm·V
//! ```

use pricer_models::models::HestonParams;

/// The six coefficients of the Heston operator at one `(S, v)` point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdeCoefficients {
    /// First price derivative, `r·S`
    pub d_s: f64,
    /// First variance derivative, `κ(θ − v)`
    pub d_v: f64,
    /// Second price derivative, `½·v·S²`
    pub d_ss: f64,
    /// Second variance derivative, `½·σ²·v`
    pub d_vv: f64,
    /// Cross derivative, `ρ·σ·v·S`
    pub d_sv: f64,
    /// Discount term, `−r`
    pub r_term: f64,
}

/// Heston operator bound to one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HestonPde {
    params: HestonParams,
}

impl HestonPde {
    /// Binds a copy of `params`.
    pub fn new(params: HestonParams) -> Self {
        Self { params }
    }

    /// Bound parameters.
    pub fn params(&self) -> &HestonParams {
        &self.params
    }

    /// Evaluates the coefficients at `(s, v)`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::models::HestonParams;
    /// use pricer_pricing::pde::HestonPde;
    ///
    /// let params = HestonParams::new(2.0, 0.04, 0.3, -0.6, 0.04, 0.03).unwrap();
    /// let c = HestonPde::new(params).coefficients(100.0, 0.04);
    /// assert!((c.d_s - 3.0).abs() < 1e-12);
    /// assert!((c.d_ss - 200.0).abs() < 1e-12);
    /// assert_eq!(c.r_term, -0.03);
    /// ```
    #[inline]
    pub fn coefficients(&self, s: f64, v: f64) -> PdeCoefficients {
        let p = &self.params;
        PdeCoefficients {
            d_s: p.r * s,
            d_v: p.kappa * (p.theta - v),
            d_ss: 0.5 * v * s * s,
            d_vv: 0.5 * p.sigma * p.sigma * v,
            d_sv: p.rho * p.sigma * v * s,
            r_term: -p.r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pde() -> HestonPde {
        HestonPde::new(HestonParams::new(2.0, 0.04, 0.3, -0.6, 0.04, 0.03).unwrap())
    }

    #[test]
    fn test_reference_point() {
        let c = pde().coefficients(100.0, 0.09);
        assert_relative_eq!(c.d_s, 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.d_v, 2.0 * (0.04 - 0.09), epsilon = 1e-12);
        assert_relative_eq!(c.d_ss, 0.5 * 0.09 * 10_000.0, epsilon = 1e-12);
        assert_relative_eq!(c.d_vv, 0.5 * 0.09 * 0.09, epsilon = 1e-12);
        assert_relative_eq!(c.d_sv, -0.6 * 0.3 * 0.09 * 100.0, epsilon = 1e-12);
        assert_eq!(c.r_term, -0.03);
    }

    #[test]
    fn test_zero_variance_kills_diffusion() {
        let c = pde().coefficients(80.0, 0.0);
        assert_eq!(c.d_ss, 0.0);
        assert_eq!(c.d_vv, 0.0);
        assert_eq!(c.d_sv, 0.0);
        assert_relative_eq!(c.d_v, 0.08, epsilon = 1e-15);
    }

    #[test]
    fn test_mean_reversion_sign() {
        let pde = pde();
        assert!(pde.coefficients(100.0, 0.01).d_v > 0.0);
        assert!(pde.coefficients(100.0, 0.5).d_v < 0.0);
        assert_eq!(pde.coefficients(100.0, 0.04).d_v, 0.0);
    }

    #[test]
    fn test_zero_spot() {
        let c = pde().coefficients(0.0, 0.04);
        assert_eq!(c.d_s, 0.0);
        assert_eq!(c.d_ss, 0.0);
    }
}
