//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions used as reference values
//! and as the closed-form [`PricingModel`](crate::models::PricingModel):
//! - Black-Scholes model for lognormal dynamics
//! - Standard normal CDF/PDF

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
