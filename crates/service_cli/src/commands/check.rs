//! Check command implementation
//!
//! Reports on the loaded configuration without pricing.

use pricer_core::types::PricingError;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::Result;

/// Run the check command
pub fn run(config: &RunConfig) -> Result<()> {
    let grid = config.pde.build_grid().map_err(PricingError::from)?;
    info!(
        nx = grid.nx(),
        nv = grid.nv(),
        s_min = grid.s_min(),
        s_max = grid.s_max(),
        v_min = grid.v_min(),
        v_max = grid.v_max(),
        time_steps = config.pde.time_steps,
        "Grid"
    );

    let model = &config.model;
    if model.satisfies_feller() {
        info!(ratio = model.feller_ratio(), "Feller condition holds");
    } else {
        warn!(ratio = model.feller_ratio(), "Feller condition violated");
    }

    if config.contract.barrier != grid.s_min() {
        warn!(
            barrier = config.contract.barrier,
            s_min = grid.s_min(),
            "Barrier is not the lowest grid price"
        );
    }
    if !(grid.s_min()..=grid.s_max()).contains(&config.query.spot) {
        warn!(spot = config.query.spot, "Query spot lies outside the price grid");
    }

    println!("Configuration OK");
    Ok(())
}
