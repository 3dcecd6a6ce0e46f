//! Option contract definitions.
//!
//! - [`VanillaOption`]: European call quote (strike, expiry, spot) consumed
//!   by [`PricingModel`](crate::models::PricingModel)
//! - [`BarrierOption`]: down-and-out barrier call terms (strike, barrier,
//!   maturity) consumed by the PDE solver
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{BarrierOption, VanillaOption};
//!
//! let vanilla = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
//! let barrier = BarrierOption::new(vanilla.strike(), 50.0, vanilla.expiry()).unwrap();
//! assert_eq!(barrier.terminal_payoff(40.0), 0.0);
//! ```

mod barrier;
mod error;
mod vanilla;

pub use barrier::BarrierOption;
pub use error::InstrumentError;
pub use vanilla::VanillaOption;
