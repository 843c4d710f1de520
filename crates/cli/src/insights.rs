//! Narrative feedback derived from a simulation result.

use expectancy_domain::{Percentage, SimulationResult};
use rust_decimal::Decimal;
use serde::Serialize;

/// Drawdown above which the result is flagged, in percent.
pub const SIGNIFICANT_DRAWDOWN_PCT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightLevel {
    Positive,
    Warning,
    Negative,
}

impl InsightLevel {
    fn icon(self) -> &'static str {
        match self {
            Self::Positive => "✅",
            Self::Warning => "⚠️",
            Self::Negative => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub level: InsightLevel,
    pub message: String,
}

impl Insight {
    fn new(level: InsightLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.level.icon(), self.message)
    }
}

/// Builds the four insights: profitability, win rate, drawdown, expectancy.
pub fn insights(result: &SimulationResult, significant_drawdown_pct: Decimal) -> Vec<Insight> {
    let actual = Percentage::from_fraction(result.actual_win_rate)
        .as_percent()
        .round_dp(1);
    let minimum = Percentage::from_fraction(result.minimum_win_rate)
        .as_percent()
        .round_dp(1);
    let drawdown = result.max_drawdown_pct;
    let shown_drawdown = drawdown.round_dp(1);

    let profitability = if result.is_profitable() {
        Insight::new(
            InsightLevel::Positive,
            "The system was profitable in this simulation.",
        )
    } else {
        Insight::new(
            InsightLevel::Negative,
            "The system was not profitable in this simulation.",
        )
    };

    let win_rate = if result.win_rate_sufficient() {
        Insight::new(
            InsightLevel::Positive,
            format!(
                "The actual win rate ({actual:.1}%) was above the minimum required win rate ({minimum:.1}%)."
            ),
        )
    } else {
        Insight::new(
            InsightLevel::Warning,
            format!(
                "The actual win rate ({actual:.1}%) was below the minimum required win rate ({minimum:.1}%)."
            ),
        )
    };

    let drawdown_insight = if drawdown > significant_drawdown_pct {
        Insight::new(
            InsightLevel::Warning,
            format!(
                "The maximum drawdown ({shown_drawdown:.1}%) was significant. Consider reducing position size."
            ),
        )
    } else {
        Insight::new(
            InsightLevel::Positive,
            format!("The maximum drawdown ({shown_drawdown:.1}%) was within reasonable limits."),
        )
    };

    let expectancy = if result.has_positive_expectancy() {
        Insight::new(
            InsightLevel::Positive,
            "The system has a positive expectancy. It's expected to be profitable in the long run.",
        )
    } else {
        Insight::new(
            InsightLevel::Negative,
            "The system has a negative expectancy. It's not expected to be profitable in the long run.",
        )
    };

    vec![profitability, win_rate, drawdown_insight, expectancy]
}
