use crate::metrics::{drawdown_series, expectancy_per_unit_risk, max_drawdown_pct, minimum_win_rate};
use crate::value_objects::parameters::SimulationParameters;
use crate::value_objects::trade_outcome::TradeOutcome;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of one trade-sequence simulation together with its summary metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub parameters: SimulationParameters,
    /// Trades in simulation order.
    pub trades: Vec<TradeOutcome>,
    pub final_balance: Decimal,
    pub total_pnl: Decimal,
    pub return_pct: Decimal,
    pub max_drawdown_pct: Decimal,
    /// Expected return per unit risked, from the parameters alone.
    pub expectancy_per_dollar: Decimal,
    /// Same value as `expectancy_per_dollar`, framed in R-multiples.
    pub expectancy_r: Decimal,
    /// Break-even win rate for the reward-to-risk ratio, as a fraction.
    pub minimum_win_rate: Decimal,
    pub win_count: usize,
    pub loss_count: usize,
    /// Realized share of winners, as a fraction.
    pub actual_win_rate: Decimal,
}

impl SimulationResult {
    /// Derives the summary metrics from a completed trade sequence.
    #[must_use]
    pub fn from_trades(parameters: SimulationParameters, trades: Vec<TradeOutcome>) -> Self {
        let start = parameters.account_balance;
        let final_balance = trades.last().map_or(start, |t| t.balance_after);
        let total_pnl = final_balance - start;
        // Only a gain can overflow here; losses are bounded by the start balance.
        let return_pct = if start.is_zero() {
            Decimal::ZERO
        } else {
            total_pnl
                .checked_div(start)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::MAX)
        };

        let win_count = trades.iter().filter(|t| t.is_win).count();
        let loss_count = trades.len() - win_count;
        let actual_win_rate = if trades.is_empty() {
            Decimal::ZERO
        } else {
            Decimal::from(win_count) / Decimal::from(trades.len())
        };

        let max_drawdown_pct = max_drawdown_pct(&equity_curve(start, &trades));
        let expectancy =
            expectancy_per_unit_risk(parameters.win_rate, parameters.reward_risk_ratio);
        let minimum_win_rate = minimum_win_rate(parameters.reward_risk_ratio);

        Self {
            parameters,
            trades,
            final_balance,
            total_pnl,
            return_pct,
            max_drawdown_pct,
            expectancy_per_dollar: expectancy,
            expectancy_r: expectancy,
            minimum_win_rate,
            win_count,
            loss_count,
            actual_win_rate,
        }
    }

    /// Starting balance followed by the balance after every trade.
    #[must_use]
    pub fn equity_curve(&self) -> Vec<Decimal> {
        equity_curve(self.parameters.account_balance, &self.trades)
    }

    /// Drawdown in percent at every point of [`Self::equity_curve`].
    #[must_use]
    pub fn drawdown_series(&self) -> Vec<Decimal> {
        drawdown_series(&self.equity_curve())
    }

    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.total_pnl > Decimal::ZERO
    }

    #[must_use]
    pub fn has_positive_expectancy(&self) -> bool {
        self.expectancy_per_dollar > Decimal::ZERO
    }

    /// Whether the realized win rate reached the break-even win rate.
    #[must_use]
    pub fn win_rate_sufficient(&self) -> bool {
        self.actual_win_rate >= self.minimum_win_rate
    }
}

fn equity_curve(start: Decimal, trades: &[TradeOutcome]) -> Vec<Decimal> {
    std::iter::once(start)
        .chain(trades.iter().map(|t| t.balance_after))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::drawdown_pct;
    use rust_decimal_macros::dec;

    fn trade(
        index: usize,
        is_win: bool,
        before: Decimal,
        pnl: Decimal,
        peak: Decimal,
    ) -> TradeOutcome {
        let after = before + pnl;
        let peak = peak.max(after);
        TradeOutcome {
            index,
            is_win,
            balance_before: before,
            risk_amount: dec!(100),
            pnl,
            balance_after: after,
            peak_balance: peak,
            drawdown_pct: drawdown_pct(peak, after),
        }
    }

    #[test]
    fn test_summary_from_trades() {
        let params = SimulationParameters::new(dec!(10000), dec!(0.5), dec!(2), dec!(0.01), 3);
        let trades = vec![
            trade(1, false, dec!(10000), dec!(-100), dec!(10000)),
            trade(2, false, dec!(9900), dec!(-100), dec!(10000)),
            trade(3, true, dec!(9800), dec!(200), dec!(10000)),
        ];

        let result = SimulationResult::from_trades(params, trades);

        assert_eq!(result.final_balance, dec!(10000));
        assert_eq!(result.total_pnl, dec!(0));
        assert_eq!(result.return_pct, dec!(0));
        assert_eq!(result.max_drawdown_pct, dec!(2));
        assert_eq!(result.win_count, 1);
        assert_eq!(result.loss_count, 2);
        assert!(!result.is_profitable());
        assert!(result.has_positive_expectancy());
        assert_eq!(result.expectancy_per_dollar, dec!(0.5));
        assert_eq!(result.expectancy_r, result.expectancy_per_dollar);
        assert_eq!(
            result.equity_curve(),
            vec![dec!(10000), dec!(9900), dec!(9800), dec!(10000)]
        );
        assert_eq!(result.drawdown_series()[2], dec!(2));
    }

    #[test]
    fn test_win_rate_sufficiency() {
        let params = SimulationParameters::new(dec!(1000), dec!(0.4), dec!(1), dec!(0.01), 2);
        let trades = vec![
            trade(1, true, dec!(1000), dec!(100), dec!(1000)),
            trade(2, false, dec!(1100), dec!(-100), dec!(1100)),
        ];
        let result = SimulationResult::from_trades(params, trades);

        assert_eq!(result.actual_win_rate, dec!(0.5));
        assert_eq!(result.minimum_win_rate, dec!(0.5));
        assert!(result.win_rate_sufficient());
        assert!(!result.has_positive_expectancy());
    }
}
