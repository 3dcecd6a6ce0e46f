//! # Pricer Risk (L4: Application)
//!
//! Bump-and-revalue sensitivities on top of a
//! [`PricingEngine`](pricer_pricing::PricingEngine).
//!
//! This crate provides:
//! - [`DeltaConfig`]: bump size and difference scheme
//! - [`RiskEngine`]: spot delta from two pricing calls
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! │  delta/  - DeltaConfig, RiskEngine      │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_pricing (L3)           │
//! │  PricingEngine over any PricingModel    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::VanillaOption;
//! use pricer_models::models::BlackScholesModel;
//! use pricer_pricing::PricingEngine;
//! use pricer_risk::{DeltaConfig, DeltaMethod, RiskEngine};
//!
//! let model = BlackScholesModel::default();
//! let engine = PricingEngine::new(&model);
//! let config = DeltaConfig::new(0.01, DeltaMethod::Central).unwrap();
//! let risk = RiskEngine::with_config(&engine, config);
//!
//! let option = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
//! let delta = risk.delta(&option).unwrap();
//! assert!((delta - 0.6368).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod delta;

pub use delta::{DeltaConfig, DeltaMethod, RiskEngine, RiskError, DEFAULT_SPOT_BUMP};
