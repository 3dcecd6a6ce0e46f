//! Delta command implementation
//!
//! Bump-and-revalue spot delta of the configured contract.

use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;
use pricer_pricing::PricingEngine;
use pricer_risk::{DeltaConfig, RiskEngine};
use tracing::info;

use super::build_model;
use crate::config::RunConfig;
use crate::error::Result;

/// Run the delta command
pub fn run(config: &RunConfig, spot: Option<f64>, bump: Option<f64>) -> Result<f64> {
    let spot = spot.unwrap_or(config.query.spot);
    let delta_config = match bump {
        Some(bump) => DeltaConfig::new(bump, config.query.method).map_err(PricingError::from)?,
        None => config.delta_config()?,
    };
    let contract = config.contract()?;
    info!(
        spot,
        bump = delta_config.bump(),
        method = ?delta_config.method(),
        "Starting delta"
    );

    let model = build_model(config)?;
    let engine = PricingEngine::new(&model);
    let risk = RiskEngine::with_config(&engine, delta_config);
    let quote = VanillaOption::new(contract.strike(), contract.maturity(), spot)
        .map_err(PricingError::from)?;
    let delta = risk.delta(&quote)?;

    println!("\n┌────────────┬────────────┐");
    println!("│ Spot       │ Delta      │");
    println!("├────────────┼────────────┤");
    println!("│ {:<10.4} │ {:<10.6} │", spot, delta);
    println!("└────────────┴────────────┘");

    info!(delta, "Delta complete");
    Ok(delta)
}
