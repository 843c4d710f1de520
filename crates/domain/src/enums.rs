use serde::{Deserialize, Serialize};

/// How the money at risk on each trade is sized.
///
/// The policy is chosen once per run and never changes between trades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSizing {
    /// `risk_per_trade` times the starting balance, identical for every trade.
    #[default]
    FixedFractionOfInitial,
    /// `risk_per_trade` times the balance just before the trade (compounding).
    FractionOfCurrent,
}

/// Result of a single simulated trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Win,
    Loss,
}

impl From<bool> for TradeSide {
    fn from(is_win: bool) -> Self {
        if is_win { Self::Win } else { Self::Loss }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Loss => write!(f, "Loss"),
        }
    }
}
