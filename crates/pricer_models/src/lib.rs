//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts, model parameters, and closed-form pricing.
//!
//! This crate provides:
//! - Contract definitions (vanilla option quote, down-and-out barrier call)
//! - Heston stochastic-volatility parameters with validation
//! - Black-Scholes closed-form formulas
//! - The [`PricingModel`](models::PricingModel) capability shared by
//!   closed-form and grid-based models
//!
//! ## Design Principles
//!
//! - **Validated construction**: every parameter record is checked once in
//!   `new` and is immutable afterwards
//! - **Per-layer errors**: each module has its own `thiserror` enum that
//!   converts into `pricer_core::types::PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
