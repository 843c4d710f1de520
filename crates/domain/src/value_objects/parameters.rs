use crate::enums::RiskSizing;
use crate::error::SimulationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of trades a single run may generate.
pub const DEFAULT_MAX_TRADES: usize = 100_000;

/// Inputs for one trade-sequence simulation.
///
/// All ratios are fractions, not percents: a 40% win rate is `0.4` and 1%
/// risk per trade is `0.01`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Starting equity.
    pub account_balance: Decimal,
    /// Probability that a trade wins, in (0, 1).
    pub win_rate: Decimal,
    /// Average win divided by average loss.
    pub reward_risk_ratio: Decimal,
    /// Fraction of the balance put at risk on each trade, in (0, 1].
    pub risk_per_trade: Decimal,
    /// Number of trades to simulate.
    pub num_trades: usize,
    /// Whether risk is sized off the initial or the current balance.
    pub risk_sizing: RiskSizing,
}

impl SimulationParameters {
    /// Creates parameters with the default [`RiskSizing::FixedFractionOfInitial`] policy.
    #[must_use]
    pub fn new(
        account_balance: Decimal,
        win_rate: Decimal,
        reward_risk_ratio: Decimal,
        risk_per_trade: Decimal,
        num_trades: usize,
    ) -> Self {
        Self {
            account_balance,
            win_rate,
            reward_risk_ratio,
            risk_per_trade,
            num_trades,
            risk_sizing: RiskSizing::default(),
        }
    }

    /// Sets the risk sizing policy.
    #[must_use]
    pub fn with_risk_sizing(mut self, risk_sizing: RiskSizing) -> Self {
        self.risk_sizing = risk_sizing;
        self
    }

    /// Checks every field against its constraint.
    ///
    /// Fields are checked in declaration order and the first violation is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming the first field
    /// that is out of range, including `num_trades` above `max_trades`.
    pub fn validate(&self, max_trades: usize) -> Result<(), SimulationError> {
        if self.account_balance <= Decimal::ZERO {
            return Err(SimulationError::invalid(
                "account_balance",
                "greater than 0",
                self.account_balance,
            ));
        }
        validate_win_rate(self.win_rate)?;
        if self.reward_risk_ratio <= Decimal::ZERO {
            return Err(SimulationError::invalid(
                "reward_risk_ratio",
                "greater than 0",
                self.reward_risk_ratio,
            ));
        }
        if self.risk_per_trade <= Decimal::ZERO || self.risk_per_trade > Decimal::ONE {
            return Err(SimulationError::invalid(
                "risk_per_trade",
                "in (0, 1]",
                self.risk_per_trade,
            ));
        }
        if self.num_trades < 1 {
            return Err(SimulationError::invalid(
                "num_trades",
                "at least 1",
                self.num_trades,
            ));
        }
        if self.num_trades > max_trades {
            return Err(SimulationError::invalid(
                "num_trades",
                "within the configured trade cap",
                format!("{} (cap {})", self.num_trades, max_trades),
            ));
        }
        Ok(())
    }
}

/// Checks that a win rate lies strictly between 0 and 1.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] for `win_rate` outside (0, 1).
pub fn validate_win_rate(win_rate: Decimal) -> Result<(), SimulationError> {
    if win_rate <= Decimal::ZERO || win_rate >= Decimal::ONE {
        return Err(SimulationError::invalid("win_rate", "in (0, 1)", win_rate));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid() -> SimulationParameters {
        SimulationParameters::new(dec!(10000), dec!(0.5), dec!(2), dec!(0.01), 100)
    }

    fn rejected_field(params: &SimulationParameters) -> &'static str {
        params
            .validate(DEFAULT_MAX_TRADES)
            .expect_err("parameters should be rejected")
            .field()
    }

    #[test]
    fn test_valid_parameters() {
        assert!(valid().validate(DEFAULT_MAX_TRADES).is_ok());
        assert_eq!(valid().risk_sizing, RiskSizing::FixedFractionOfInitial);
    }

    #[test]
    fn test_each_constraint_is_enforced() {
        let mut p = valid();
        p.account_balance = dec!(0);
        assert_eq!(rejected_field(&p), "account_balance");

        let mut p = valid();
        p.account_balance = dec!(-5);
        assert_eq!(rejected_field(&p), "account_balance");

        for win_rate in [dec!(0), dec!(1), dec!(-0.1), dec!(1.5)] {
            let mut p = valid();
            p.win_rate = win_rate;
            assert_eq!(rejected_field(&p), "win_rate");
        }

        for ratio in [dec!(0), dec!(-1)] {
            let mut p = valid();
            p.reward_risk_ratio = ratio;
            assert_eq!(rejected_field(&p), "reward_risk_ratio");
        }

        for risk in [dec!(0), dec!(-0.01), dec!(1.01)] {
            let mut p = valid();
            p.risk_per_trade = risk;
            assert_eq!(rejected_field(&p), "risk_per_trade");
        }

        let mut p = valid();
        p.num_trades = 0;
        assert_eq!(rejected_field(&p), "num_trades");
    }

    #[test]
    fn test_full_risk_is_allowed() {
        let mut p = valid();
        p.risk_per_trade = dec!(1);
        assert!(p.validate(DEFAULT_MAX_TRADES).is_ok());
    }

    #[test]
    fn test_trade_cap() {
        let p = valid();
        assert!(p.validate(100).is_ok());
        let err = p.validate(99).unwrap_err();
        assert_eq!(err.field(), "num_trades");
        assert!(err.to_string().contains("cap 99"));
    }
}
