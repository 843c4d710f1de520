//! Closed-form strategy metrics.

pub mod drawdown;
pub mod expectancy;

pub use drawdown::{drawdown_pct, drawdown_series, max_drawdown_pct};
pub use expectancy::{expectancy_per_unit_risk, minimum_win_rate};
