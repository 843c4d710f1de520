pub mod parameters;
pub mod percentage;
pub mod simulation_result;
pub mod streak_estimate;
pub mod trade_outcome;

pub use parameters::{DEFAULT_MAX_TRADES, SimulationParameters, validate_win_rate};
pub use percentage::Percentage;
pub use simulation_result::SimulationResult;
pub use streak_estimate::StreakEstimate;
pub use trade_outcome::TradeOutcome;
