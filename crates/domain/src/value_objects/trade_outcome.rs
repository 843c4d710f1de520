use crate::enums::TradeSide;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One simulated trade, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOutcome {
    /// 1-based position in the sequence.
    pub index: usize,
    pub is_win: bool,
    /// Equity before the trade.
    pub balance_before: Decimal,
    /// Money put at risk on this trade.
    pub risk_amount: Decimal,
    /// Signed profit or loss.
    pub pnl: Decimal,
    /// Equity after the trade.
    pub balance_after: Decimal,
    /// Highest equity seen so far, the starting balance included.
    pub peak_balance: Decimal,
    /// Drawdown from `peak_balance` to `balance_after`, in percent.
    pub drawdown_pct: Decimal,
}

impl TradeOutcome {
    pub fn side(&self) -> TradeSide {
        TradeSide::from(self.is_win)
    }

    /// Profit or loss as a multiple of the amount risked.
    pub fn r_multiple(&self) -> Decimal {
        if self.risk_amount.is_zero() {
            return Decimal::ZERO;
        }
        self.pnl / self.risk_amount
    }
}
