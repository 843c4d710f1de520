//! Domain model for trading-expectancy analysis.
//!
//! Value objects describing simulation inputs and outputs, the engine's error
//! type, and the closed-form metrics (expectancy, break-even win rate,
//! drawdown) that do not depend on any random path.

pub mod enums;
pub mod error;
pub mod metrics;
pub mod value_objects;

pub use enums::{RiskSizing, TradeSide};
pub use error::SimulationError;
pub use value_objects::{
    DEFAULT_MAX_TRADES, Percentage, SimulationParameters, SimulationResult, StreakEstimate,
    TradeOutcome,
};
