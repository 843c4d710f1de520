//! Range checks and unit conversion for user input.
//!
//! Users enter win rate and risk as percents; the engine works in fractions.
//! The bounds here are presentation limits, tighter than what the engine
//! accepts.

use expectancy_domain::{Percentage, RiskSizing, SimulationParameters};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        min: Decimal,
        max: Decimal,
        value: Decimal,
    },
}

/// Inclusive bounds for one input field.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub name: &'static str,
    pub min: Decimal,
    pub max: Decimal,
}

impl Bounds {
    const fn new(name: &'static str, min: Decimal, max: Decimal) -> Self {
        Self { name, min, max }
    }

    pub fn check(&self, value: Decimal) -> Result<Decimal, CliError> {
        if value < self.min || value > self.max {
            return Err(CliError::OutOfRange {
                name: self.name,
                min: self.min,
                max: self.max,
                value,
            });
        }
        Ok(value)
    }
}

pub const BALANCE: Bounds = Bounds::new(
    "balance",
    Decimal::from_parts(100, 0, 0, false, 0),
    Decimal::from_parts(1_000_000, 0, 0, false, 0),
);
pub const WIN_RATE_PCT: Bounds = Bounds::new(
    "win-rate",
    Decimal::from_parts(5, 0, 0, false, 0),
    Decimal::from_parts(95, 0, 0, false, 0),
);
pub const REWARD_RISK: Bounds = Bounds::new(
    "reward-risk",
    Decimal::from_parts(1, 0, 0, false, 1),
    Decimal::from_parts(10, 0, 0, false, 0),
);
pub const RISK_PCT: Bounds = Bounds::new(
    "risk",
    Decimal::from_parts(1, 0, 0, false, 1),
    Decimal::from_parts(10, 0, 0, false, 0),
);
pub const MIN_TRADES: u64 = 10;
pub const SAMPLE_SIZE_MIN: u64 = 10;
pub const SAMPLE_SIZE_MAX: u64 = 10_000;

/// Raw simulation input as typed by the user.
#[derive(Debug, Clone)]
pub struct SimulateInput {
    pub balance: Decimal,
    pub win_rate_pct: Decimal,
    pub reward_risk: Decimal,
    pub risk_pct: Decimal,
    pub trades: u64,
    pub risk_sizing: RiskSizing,
}

impl SimulateInput {
    /// Checks every field and converts percents to fractions.
    pub fn into_parameters(self, max_trades: usize) -> Result<SimulationParameters, CliError> {
        let balance = BALANCE.check(self.balance)?;
        let win_rate = Percentage::from_percent(WIN_RATE_PCT.check(self.win_rate_pct)?);
        let reward_risk = REWARD_RISK.check(self.reward_risk)?;
        let risk = Percentage::from_percent(RISK_PCT.check(self.risk_pct)?);
        let trades = count_in_range("trades", self.trades, MIN_TRADES, max_trades as u64)?;

        Ok(SimulationParameters::new(
            balance,
            win_rate.as_fraction(),
            reward_risk,
            risk.as_fraction(),
            trades as usize,
        )
        .with_risk_sizing(self.risk_sizing))
    }
}

/// Checks a losing-streak sample size.
pub fn sample_size(value: u64) -> Result<u64, CliError> {
    count_in_range("sample-size", value, SAMPLE_SIZE_MIN, SAMPLE_SIZE_MAX)
}

/// Checks an optional single win rate (percent) for the streak command.
pub fn streak_win_rate(percent: Decimal) -> Result<Decimal, CliError> {
    Ok(Percentage::from_percent(WIN_RATE_PCT.check(percent)?).as_fraction())
}

fn count_in_range(name: &'static str, value: u64, min: u64, max: u64) -> Result<u64, CliError> {
    Bounds::new(name, Decimal::from(min), Decimal::from(max)).check(Decimal::from(value))?;
    Ok(value)
}
