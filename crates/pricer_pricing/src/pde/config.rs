//! Serialisable description of a PDE run: grid, step count and settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PdeError;
use super::grid::{Grid2D, Stretch};
use super::settings::{AdiScheme, SolverSettings, VarianceSelection};

/// Maximum number of backward time steps accepted from configuration.
pub const MAX_TIME_STEPS: usize = 100_000;

/// Grid section of a [`PdeConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Lowest price, normally the barrier
    pub s_min: f64,
    /// Highest price
    pub s_max: f64,
    /// Price nodes
    pub nx: usize,
    /// Lowest variance
    pub v_min: f64,
    /// Highest variance
    pub v_max: f64,
    /// Variance nodes
    pub nv: usize,
    /// Price-axis stretch factor
    #[cfg_attr(feature = "serde", serde(default = "default_price_stretch"))]
    pub price_stretch: f64,
    /// Variance-axis stretch factor
    #[cfg_attr(feature = "serde", serde(default = "default_variance_stretch"))]
    pub variance_stretch: f64,
}

#[cfg(feature = "serde")]
fn default_price_stretch() -> f64 {
    Stretch::DEFAULT_PRICE
}

#[cfg(feature = "serde")]
fn default_variance_stretch() -> f64 {
    Stretch::DEFAULT_VARIANCE
}

impl GridConfig {
    /// Grid section with the default stretch factors.
    pub fn new(s_min: f64, s_max: f64, nx: usize, v_min: f64, v_max: f64, nv: usize) -> Self {
        Self {
            s_min,
            s_max,
            nx,
            v_min,
            v_max,
            nv,
            price_stretch: Stretch::DEFAULT_PRICE,
            variance_stretch: Stretch::DEFAULT_VARIANCE,
        }
    }

    /// Builds the grid.
    ///
    /// # Errors
    /// `PdeError::InvalidGrid` as for [`Grid2D::with_stretch`].
    pub fn build(&self) -> Result<Grid2D, PdeError> {
        Grid2D::with_stretch(
            self.s_min,
            self.s_max,
            self.nx,
            self.v_min,
            self.v_max,
            self.nv,
            Stretch {
                price: self.price_stretch,
                variance: self.variance_stretch,
            },
        )
    }
}

/// Everything the barrier solver needs apart from the model and contract.
///
/// # Examples
/// ```
/// use pricer_pricing::pde::{AdiScheme, PdeConfig};
///
/// let config: PdeConfig = toml::from_str(r#"
///     time_steps = 100
///
///     [grid]
///     s_min = 50.0
///     s_max = 150.0
///     nx = 101
///     v_min = 0.0
///     v_max = 1.0
///     nv = 51
/// "#).unwrap();
///
/// config.validate().unwrap();
/// assert_eq!(config.scheme, AdiScheme::PriceOnly);
/// assert_eq!(config.build_grid().unwrap().nx(), 101);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PdeConfig {
    /// Grid bounds, sizes and stretch
    pub grid: GridConfig,
    /// Number of backward steps `Nt`
    pub time_steps: usize,
    /// Time-stepping scheme
    #[cfg_attr(feature = "serde", serde(default))]
    pub scheme: AdiScheme,
    /// Variance read-out
    #[cfg_attr(feature = "serde", serde(default))]
    pub variance_selection: VarianceSelection,
}

impl PdeConfig {
    /// Configuration with the default scheme and read-out.
    pub fn new(grid: GridConfig, time_steps: usize) -> Self {
        Self {
            grid,
            time_steps,
            scheme: AdiScheme::default(),
            variance_selection: VarianceSelection::default(),
        }
    }

    /// Checks the step count and scheme, then builds the grid to check it.
    ///
    /// # Errors
    /// - `PdeError::InvalidConfiguration` for a step count outside
    ///   `1..=MAX_TIME_STEPS` or an invalid scheme
    /// - `PdeError::InvalidGrid` for an unusable grid section
    pub fn validate(&self) -> Result<(), PdeError> {
        if self.time_steps == 0 || self.time_steps > MAX_TIME_STEPS {
            return Err(PdeError::InvalidConfiguration(format!(
                "time_steps must lie in [1, {}], got {}",
                MAX_TIME_STEPS, self.time_steps
            )));
        }
        self.scheme.validate()?;
        self.grid.build().map(|_| ())
    }

    /// Builds the grid described by the `grid` section.
    ///
    /// # Errors
    /// `PdeError::InvalidGrid` as for [`Grid2D::with_stretch`].
    pub fn build_grid(&self) -> Result<Grid2D, PdeError> {
        self.grid.build()
    }

    /// Scheme and read-out as [`SolverSettings`].
    pub fn settings(&self) -> SolverSettings {
        SolverSettings {
            scheme: self.scheme,
            variance_selection: self.variance_selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> PdeConfig {
        PdeConfig::new(GridConfig::new(50.0, 150.0, 101, 0.0, 1.0, 51), 100)
    }

    #[test]
    fn test_reference_config_is_valid() {
        let config = reference();
        assert!(config.validate().is_ok());
        assert_eq!(config.settings(), SolverSettings::default());

        let grid = config.build_grid().unwrap();
        assert_eq!(grid.stretch(), Stretch::default());
        assert_eq!(grid.nv(), 51);
    }

    #[test]
    fn test_time_step_bounds() {
        let mut config = reference();
        config.time_steps = 0;
        assert!(matches!(
            config.validate(),
            Err(PdeError::InvalidConfiguration(_))
        ));
        config.time_steps = MAX_TIME_STEPS + 1;
        assert!(matches!(
            config.validate(),
            Err(PdeError::InvalidConfiguration(_))
        ));
        config.time_steps = MAX_TIME_STEPS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_grid_section() {
        let mut config = reference();
        config.grid.nx = 2;
        assert!(matches!(config.validate(), Err(PdeError::InvalidGrid(_))));
    }

    #[test]
    fn test_invalid_scheme() {
        let mut config = reference();
        config.scheme = AdiScheme::Douglas { theta: 2.0 };
        assert!(matches!(
            config.validate(),
            Err(PdeError::InvalidConfiguration(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_with_overrides() {
        let config: PdeConfig = toml::from_str(
            r#"
            time_steps = 200
            scheme = { type = "douglas", theta = 0.5 }
            variance_selection = "bilinear"

            [grid]
            s_min = 80.0
            s_max = 200.0
            nx = 61
            v_min = 0.0
            v_max = 0.5
            nv = 31
            price_stretch = 1.5
            "#,
        )
        .unwrap();

        assert_eq!(config.time_steps, 200);
        assert_eq!(config.scheme, AdiScheme::douglas());
        assert_eq!(config.variance_selection, VarianceSelection::Bilinear);
        assert_eq!(config.grid.price_stretch, 1.5);
        assert_eq!(config.grid.variance_stretch, Stretch::DEFAULT_VARIANCE);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_missing_grid_is_rejected() {
        assert!(toml::from_str::<PdeConfig>("time_steps = 10").is_err());
    }
}
