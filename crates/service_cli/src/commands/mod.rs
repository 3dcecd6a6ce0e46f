//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod delta;
pub mod price;

use pricer_core::types::PricingError;
use pricer_pricing::HestonPdeModel;

use crate::config::RunConfig;
use crate::error::Result;

/// Build the grid-based model described by the configuration
pub(crate) fn build_model(config: &RunConfig) -> Result<HestonPdeModel> {
    Ok(
        HestonPdeModel::from_config(&config.pde, config.model, config.contract.barrier)
            .map_err(PricingError::from)?,
    )
}
