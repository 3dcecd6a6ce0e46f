//! Run configuration
//!
//! A single TOML file describes the model, the contract, the PDE grid and
//! the query point. Parsing and validation both happen in [`RunConfig::from_file`].

use std::path::Path;
use std::str::FromStr;

use pricer_core::types::PricingError;
use pricer_models::instruments::BarrierOption;
use pricer_models::models::HestonParams;
use pricer_pricing::pde::PdeConfig;
use pricer_risk::{DeltaConfig, DeltaMethod, DEFAULT_SPOT_BUMP};
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Log levels accepted in the `log_level` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Contract section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ContractConfig {
    pub strike: f64,
    pub barrier: f64,
    pub maturity: f64,
}

/// Query section: where to read the price, and how to bump for delta
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct QueryConfig {
    pub spot: f64,
    #[serde(default = "default_bump")]
    pub bump: f64,
    #[serde(default)]
    pub method: DeltaMethod,
}

fn default_bump() -> f64 {
    DEFAULT_SPOT_BUMP
}

/// Complete run description
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub log_level: LogLevel,
    pub model: HestonParams,
    pub contract: ContractConfig,
    pub pde: PdeConfig,
    pub query: QueryConfig,
}

impl RunConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.model.validate().map_err(PricingError::from)?;
        self.contract()?;
        self.pde.validate().map_err(PricingError::from)?;
        if !(self.query.spot.is_finite() && self.query.spot > 0.0) {
            return Err(CliError::Config(format!(
                "query.spot must be finite and positive, got {}",
                self.query.spot
            )));
        }
        self.delta_config()?;
        Ok(())
    }

    /// Validated barrier contract
    pub fn contract(&self) -> Result<BarrierOption> {
        let c = self.contract;
        Ok(BarrierOption::new(c.strike, c.barrier, c.maturity).map_err(PricingError::from)?)
    }

    /// Delta bump settings from the query section
    pub fn delta_config(&self) -> Result<DeltaConfig> {
        Ok(DeltaConfig::new(self.query.bump, self.query.method).map_err(PricingError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_pricing::pde::AdiScheme;
    use std::io::Write;

    const SAMPLE: &str = include_str!("../barrier.toml");

    #[test]
    fn test_sample_config_loads() {
        let config = RunConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.model.kappa, 2.0);
        assert_eq!(config.contract.barrier, 50.0);
        assert_eq!(config.pde.time_steps, 100);
        assert_eq!(config.pde.grid.nx, 101);
        assert_eq!(config.pde.scheme, AdiScheme::PriceOnly);
        assert_eq!(config.query.method, DeltaMethod::Forward);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = RunConfig::from_file(file.path()).unwrap();
        assert_eq!(config.query.spot, 100.0);
    }

    #[test]
    fn test_missing_file() {
        let err = RunConfig::from_file(Path::new("/nonexistent/barrier.toml")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_sections_are_rejected() {
        let bad_rho = SAMPLE.replace("rho = -0.6", "rho = -1.6");
        assert!(matches!(
            RunConfig::from_toml(&bad_rho),
            Err(CliError::Pricing(PricingError::InvalidInput(_)))
        ));

        let bad_steps = SAMPLE.replace("time_steps = 100", "time_steps = 0");
        assert!(RunConfig::from_toml(&bad_steps).is_err());

        let bad_bump = SAMPLE.replace("bump = 0.01", "bump = -1.0");
        assert!(RunConfig::from_toml(&bad_bump).is_err());

        let bad_level = SAMPLE.replace("\"info\"", "\"loud\"");
        assert!(matches!(
            RunConfig::from_toml(&bad_level),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert!(LogLevel::from_str("verbose").is_err());
    }
}
