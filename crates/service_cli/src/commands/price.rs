//! Price command implementation
//!
//! Prices the configured down-and-out call at the query spot.

use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;
use pricer_pricing::PricingEngine;
use tracing::info;

use super::build_model;
use crate::config::RunConfig;
use crate::error::Result;

/// Run the price command
pub fn run(config: &RunConfig, spot: Option<f64>) -> Result<f64> {
    let spot = spot.unwrap_or(config.query.spot);
    let contract = config.contract()?;
    info!(
        strike = contract.strike(),
        barrier = contract.barrier(),
        maturity = contract.maturity(),
        spot,
        scheme = ?config.pde.scheme,
        "Starting pricing"
    );

    let model = build_model(config)?;
    let engine = PricingEngine::new(&model);
    let quote = VanillaOption::new(contract.strike(), contract.maturity(), spot)
        .map_err(PricingError::from)?;
    let price = engine.price_option(&quote)?;

    println!("\n┌────────────┬────────────┐");
    println!("│ Spot       │ PV         │");
    println!("├────────────┼────────────┤");
    println!("│ {:<10.4} │ {:<10.6} │", spot, price);
    println!("└────────────┴────────────┘");

    info!(price, "Pricing complete");
    Ok(price)
}
