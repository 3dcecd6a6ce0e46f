//! CLI error types

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised by the CLI before or while pricing
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
