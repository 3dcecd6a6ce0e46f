//! Pricing models.
//!
//! - [`PricingModel`]: shared capability, price a [`VanillaOption`] quote
//! - [`BlackScholesModel`]: closed-form variant
//! - [`heston`]: Heston parameters consumed by the grid-based variant in
//!   `pricer_pricing`
//!
//! The closed-form model needs only a rate and a volatility, while the
//! grid-based model is configured at construction with a grid, Heston
//! parameters and solver settings. Both are then priced through the same
//! trait.
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::VanillaOption;
//! use pricer_models::models::{BlackScholesModel, PricingModel};
//!
//! let model: &dyn PricingModel = &BlackScholesModel::default();
//! let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
//! assert!(model.price_option(&option).unwrap() > 0.0);
//! ```

pub mod black_scholes_model;
pub mod heston;

pub use black_scholes_model::BlackScholesModel;
pub use heston::{HestonError, HestonParams};

use pricer_core::types::PricingError;

use crate::instruments::VanillaOption;

/// Something that turns an option quote into a scalar price.
pub trait PricingModel {
    /// Prices the quote at its own spot.
    ///
    /// # Errors
    /// Model-specific; every failure is reported as a [`PricingError`].
    fn price_option(&self, option: &VanillaOption) -> Result<f64, PricingError>;

    /// Short identifier used in logs.
    fn name(&self) -> &str;
}
