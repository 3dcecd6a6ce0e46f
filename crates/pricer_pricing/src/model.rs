//! Grid-based [`PricingModel`] backed by the barrier PDE solver.

use pricer_core::types::PricingError;
use pricer_models::instruments::{BarrierOption, VanillaOption};
use pricer_models::models::{HestonParams, PricingModel};
use tracing::debug;

use crate::pde::{BarrierAdiSolver, Grid2D, PdeConfig, PdeError, SolverSettings};

/// Heston PDE model that prices every quote as a down-and-out call.
///
/// Grid, parameters, barrier level and step count are fixed at
/// construction; each quote supplies strike, expiry and spot. Every call
/// runs a fresh solver against the owned grid.
///
/// # Examples
/// ```
/// use pricer_models::instruments::VanillaOption;
/// use pricer_models::models::{HestonParams, PricingModel};
/// use pricer_pricing::pde::{Grid2D, SolverSettings};
/// use pricer_pricing::HestonPdeModel;
///
/// let grid = Grid2D::new(50.0, 150.0, 61, 0.0, 1.0, 31).unwrap();
/// let params = HestonParams::new(2.0, 0.04, 0.3, -0.6, 0.04, 0.03).unwrap();
/// let model = HestonPdeModel::new(grid, params, 50.0, 50, SolverSettings::default()).unwrap();
///
/// let quote = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
/// let price = model.price_option(&quote).unwrap();
/// assert!(price.is_finite() && price >= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct HestonPdeModel {
    grid: Grid2D,
    params: HestonParams,
    barrier: f64,
    time_steps: usize,
    settings: SolverSettings,
}

impl HestonPdeModel {
    /// Creates the model.
    ///
    /// # Errors
    /// - `PdeError::InvalidModel` for invalid parameters
    /// - `PdeError::InvalidConfiguration` for zero time steps, an invalid
    ///   scheme, or a negative or non-finite barrier
    pub fn new(
        grid: Grid2D,
        params: HestonParams,
        barrier: f64,
        time_steps: usize,
        settings: SolverSettings,
    ) -> Result<Self, PdeError> {
        params.validate()?;
        settings.scheme.validate()?;
        if time_steps == 0 {
            return Err(PdeError::InvalidConfiguration(
                "time_steps must be at least 1".to_string(),
            ));
        }
        if !(barrier.is_finite() && barrier >= 0.0) {
            return Err(PdeError::InvalidConfiguration(format!(
                "barrier must be finite and non-negative, got {}",
                barrier
            )));
        }

        Ok(Self {
            grid,
            params,
            barrier,
            time_steps,
            settings,
        })
    }

    /// Creates the model from a run description.
    ///
    /// # Errors
    /// Configuration errors from [`PdeConfig::validate`], then as
    /// [`HestonPdeModel::new`].
    pub fn from_config(
        config: &PdeConfig,
        params: HestonParams,
        barrier: f64,
    ) -> Result<Self, PdeError> {
        config.validate()?;
        Self::new(
            config.build_grid()?,
            params,
            barrier,
            config.time_steps,
            config.settings(),
        )
    }

    /// Grid shared by every solve.
    pub fn grid(&self) -> &Grid2D {
        &self.grid
    }

    /// Heston parameters.
    pub fn params(&self) -> &HestonParams {
        &self.params
    }

    /// Knock-out level.
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    /// Backward steps per solve.
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Scheme and read-out.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Prices a down-and-out call with the given terms at `spot`.
    ///
    /// # Errors
    /// Any [`PdeError`] from the solver, contract validation failures as
    /// `PricingError::InvalidInput`.
    pub fn price_barrier(
        &self,
        strike: f64,
        maturity: f64,
        spot: f64,
    ) -> Result<f64, PricingError> {
        let contract = BarrierOption::new(strike, self.barrier, maturity)?;
        let mut solver = BarrierAdiSolver::with_settings(
            &self.grid,
            &self.params,
            contract,
            self.time_steps,
            self.settings,
        )?;
        let price = solver.price_down_and_out_call(spot)?;
        debug!(strike, maturity, spot, price, "heston pde quote");
        Ok(price)
    }
}

impl PricingModel for HestonPdeModel {
    fn price_option(&self, option: &VanillaOption) -> Result<f64, PricingError> {
        self.price_barrier(option.strike(), option.expiry(), option.spot())
    }

    fn name(&self) -> &str {
        "heston-pde"
    }
}
