//! # Pricer Pricing (Layer 3: Numerical Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns the contracts and model parameters of Layer 2 into
//! prices:
//! - Finite-difference Heston PDE solver for down-and-out barrier calls
//!   ([`pde`])
//! - Grid-based [`PricingModel`](pricer_models::models::PricingModel)
//!   implementation ([`HestonPdeModel`])
//! - Non-owning pricing engine façade ([`PricingEngine`])
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricingError`, tridiagonal solver
//! - Layer 2 (pricer_models): `HestonParams`, `BarrierOption`,
//!   `VanillaOption`, `PricingModel`
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::VanillaOption;
//! use pricer_models::models::HestonParams;
//! use pricer_pricing::pde::{GridConfig, PdeConfig};
//! use pricer_pricing::{HestonPdeModel, PricingEngine};
//!
//! let config = PdeConfig::new(GridConfig::new(50.0, 150.0, 61, 0.0, 1.0, 31), 50);
//! let params = HestonParams::new(2.0, 0.04, 0.3, -0.6, 0.04, 0.03).unwrap();
//! let model = HestonPdeModel::from_config(&config, params, 50.0).unwrap();
//!
//! let engine = PricingEngine::new(&model);
//! let quote = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
//! let price = engine.price_option(&quote).unwrap();
//! assert!(price >= 0.0);
//! ```
//!
//! ## Logging
//!
//! Library code emits `tracing` events only; installing a subscriber is
//! left to the binary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

pub mod engine;
pub mod model;
pub mod pde;

pub use engine::PricingEngine;
pub use model::HestonPdeModel;
pub use pde::{BarrierAdiSolver, Grid2D, PdeConfig, PdeError};
