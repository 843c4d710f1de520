//! Statistics engine for trading-expectancy analysis.
//!
//! Two independent, pure components:
//! - [`StreakEstimator`]: closed-form expected maximum losing streak
//! - [`TradeSequenceSimulator`]: one random trade path plus its metrics
//!
//! Randomness is always supplied by the caller through [`RandomSource`].

/// Prelude module for convenient imports.
pub mod prelude;

/// Uniform draw sources.
pub mod random_source;
/// Losing-streak estimation.
pub mod streak;
/// Trade-sequence simulation.
pub mod trade_sequence;

pub use random_source::{RandomSource, RngSource, ScriptedSource};
pub use streak::{StreakEstimator, estimate_max_losing_streak, standard_win_rates, streak_table};
pub use trade_sequence::{TradeSequenceSimulator, simulate};
