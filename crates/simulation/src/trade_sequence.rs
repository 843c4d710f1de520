//! Trade-sequence simulator.
//!
//! Generates one random win/loss path for a set of strategy parameters and
//! tracks the account balance, the running peak and the drawdown after every
//! trade.

use crate::random_source::RandomSource;
use expectancy_domain::metrics::drawdown_pct;
use expectancy_domain::{
    DEFAULT_MAX_TRADES, RiskSizing, SimulationError, SimulationParameters, SimulationResult,
    TradeOutcome,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive as _;
use tracing::debug;

/// Simulates trade sequences, rejecting runs longer than `max_trades`.
#[derive(Debug, Clone, Copy)]
pub struct TradeSequenceSimulator {
    max_trades: usize,
}

impl Default for TradeSequenceSimulator {
    fn default() -> Self {
        Self {
            max_trades: DEFAULT_MAX_TRADES,
        }
    }
}

impl TradeSequenceSimulator {
    /// Creates a simulator capped at [`DEFAULT_MAX_TRADES`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trade cap.
    #[must_use]
    pub fn with_max_trades(mut self, max_trades: usize) -> Self {
        self.max_trades = max_trades;
        self
    }

    #[must_use]
    pub fn max_trades(&self) -> usize {
        self.max_trades
    }

    /// Runs one simulation.
    ///
    /// Parameters are validated before the first draw, so a rejected call
    /// leaves `source` untouched.
    ///
    /// # Arguments
    ///
    /// * `params` - Strategy parameters, including the risk sizing policy
    /// * `source` - Uniform draws; a trade wins when its draw is below the win rate
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] for any parameter outside
    /// its range, including a trade count above the cap.
    pub fn simulate<R>(
        &self,
        params: &SimulationParameters,
        source: &mut R,
    ) -> Result<SimulationResult, SimulationError>
    where
        R: RandomSource + ?Sized,
    {
        params.validate(self.max_trades)?;
        let win_threshold = params.win_rate.to_f64().ok_or_else(|| {
            SimulationError::invalid("win_rate", "representable as f64", params.win_rate)
        })?;

        debug!(
            account_balance = %params.account_balance,
            win_rate = %params.win_rate,
            reward_risk_ratio = %params.reward_risk_ratio,
            risk_per_trade = %params.risk_per_trade,
            num_trades = params.num_trades,
            risk_sizing = ?params.risk_sizing,
            "Starting trade sequence simulation"
        );

        let mut trades = Vec::with_capacity(params.num_trades);
        let mut balance = params.account_balance;
        let mut peak = params.account_balance;

        for index in 1..=params.num_trades {
            let is_win = source.next_unit() < win_threshold;
            let balance_before = balance;
            let risk_amount = risk_amount(params, balance_before);
            let planned_pnl = if is_win {
                risk_amount.saturating_mul(params.reward_risk_ratio)
            } else {
                -risk_amount
            };

            balance = balance_before.saturating_add(planned_pnl);
            // Recorded P&L is the realized change, which differs from the
            // planned one once the balance saturates at `Decimal::MAX`.
            let pnl = balance - balance_before;
            peak = peak.max(balance);

            trades.push(TradeOutcome {
                index,
                is_win,
                balance_before,
                risk_amount,
                pnl,
                balance_after: balance,
                peak_balance: peak,
                drawdown_pct: drawdown_pct(peak, balance),
            });
        }

        let result = SimulationResult::from_trades(params.clone(), trades);
        debug!(
            final_balance = %result.final_balance,
            return_pct = %result.return_pct,
            max_drawdown_pct = %result.max_drawdown_pct,
            wins = result.win_count,
            losses = result.loss_count,
            "Trade sequence simulation complete"
        );
        Ok(result)
    }
}

/// Money at risk on the next trade.
///
/// Capped at the balance available before the trade, so the balance never
/// goes below zero.
fn risk_amount(params: &SimulationParameters, balance_before: Decimal) -> Decimal {
    let basis = match params.risk_sizing {
        RiskSizing::FixedFractionOfInitial => params.account_balance,
        RiskSizing::FractionOfCurrent => balance_before,
    };
    (basis * params.risk_per_trade)
        .min(balance_before)
        .max(Decimal::ZERO)
}

/// Runs one simulation with the default trade cap.
///
/// # Errors
///
/// See [`TradeSequenceSimulator::simulate`].
pub fn simulate<R>(
    params: &SimulationParameters,
    source: &mut R,
) -> Result<SimulationResult, SimulationError>
where
    R: RandomSource + ?Sized,
{
    TradeSequenceSimulator::new().simulate(params, source)
}
