//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use expectancy_simulation::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let params = SimulationParameters::new(
//!     Decimal::from(10_000),
//!     Decimal::new(5, 1),
//!     Decimal::from(2),
//!     Decimal::new(1, 2),
//!     50,
//! );
//! let result = simulate(&params, &mut RngSource::seeded(7)).unwrap();
//! assert_eq!(result.trades.len(), 50);
//! ```

// Domain types
pub use expectancy_domain::{
    RiskSizing, SimulationError, SimulationParameters, SimulationResult, StreakEstimate,
    TradeOutcome,
};

// Random sources
pub use crate::random_source::{RandomSource, RngSource, ScriptedSource};

// Streak estimation
pub use crate::streak::{StreakEstimator, estimate_max_losing_streak, streak_table};

// Trade sequence simulation
pub use crate::trade_sequence::{TradeSequenceSimulator, simulate};
