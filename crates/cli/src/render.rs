//! Table, text and JSON rendering of engine results.

use crate::insights::Insight;
use expectancy_domain::{Percentage, SimulationResult, StreakEstimate};
use prettytable::{Cell, Row, Table};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive as _;
use serde::Serialize;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Formats money as `$12,345.67` (`-$12.00` for losses).
pub fn money(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{fraction}")
}

fn pct(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

fn titles(names: &[&str]) -> Row {
    Row::new(names.iter().map(|name| Cell::new(name)).collect())
}

fn left(value: impl ToString) -> Cell {
    Cell::new(&value.to_string())
}

fn right(value: impl ToString) -> Cell {
    Cell::new(&value.to_string()).style_spec("r")
}

/// Summary metrics as a two-column table.
pub fn summary_table(result: &SimulationResult) -> Table {
    let rows = [
        ("Final Account Balance", money(result.final_balance)),
        ("Profit/Loss", money(result.total_pnl)),
        ("Return", pct(result.return_pct)),
        ("Max Drawdown", pct(result.max_drawdown_pct)),
        (
            "Expectancy (per $1 risked)",
            money(result.expectancy_per_dollar),
        ),
        (
            "Expectancy R",
            format!("{:.2}R", result.expectancy_r.round_dp(2)),
        ),
        (
            "Actual Win Rate",
            Percentage::from_fraction(result.actual_win_rate).to_string(),
        ),
        (
            "Minimum Win Rate",
            Percentage::from_fraction(result.minimum_win_rate).to_string(),
        ),
        (
            "Trades",
            format!(
                "{} ({}W / {}L)",
                result.trades.len(),
                result.win_count,
                result.loss_count
            ),
        ),
    ];

    let mut table = Table::new();
    table.set_titles(titles(&["Metric", "Value"]));
    for (metric, value) in rows {
        table.add_row(Row::new(vec![left(metric), right(value)]));
    }
    table
}

/// One row per trade, in simulation order.
pub fn trades_table(result: &SimulationResult) -> Table {
    let mut table = Table::new();
    table.set_titles(titles(&[
        "Trade #",
        "Win/Loss",
        "Pre-Balance",
        "Risk Amount",
        "P&L",
        "After-Balance",
        "Drawdown",
        "Peak Balance",
    ]));
    for trade in &result.trades {
        table.add_row(Row::new(vec![
            right(trade.index),
            left(trade.side()),
            right(money(trade.balance_before)),
            right(money(trade.risk_amount)),
            right(money(trade.pnl)),
            right(money(trade.balance_after)),
            right(pct(trade.drawdown_pct)),
            right(money(trade.peak_balance)),
        ]));
    }
    table
}

/// Expected losing streak per win rate.
pub fn streak_table(sample_size: u64, rows: &[StreakEstimate]) -> Table {
    let mut table = Table::new();
    let streak_title = format!("Expected Losing Streak ({sample_size} trades)");
    table.set_titles(titles(&["Win Rate %", &streak_title]));
    for estimate in rows {
        let win_rate = Percentage::from_fraction(estimate.win_rate)
            .as_percent()
            .round_dp(0);
        table.add_row(Row::new(vec![
            right(format!("{win_rate:.0}%")),
            right(format!("{:.2}", estimate.expected_max_streak)),
        ]));
    }
    table
}

/// Compresses a series into at most `width` block characters.
///
/// Each character shows the last value of its bucket, scaled between the
/// series minimum and maximum.
pub fn sparkline(values: &[Decimal], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let floats: Vec<f64> = values.iter().map(|v| v.to_f64().unwrap_or(0.0)).collect();
    let min = floats.iter().copied().fold(f64::INFINITY, f64::min);
    let max = floats.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let buckets = width.min(floats.len());
    (1..=buckets)
        .map(|b| {
            let idx = (b * floats.len()).div_ceil(buckets) - 1;
            let level = if span > 0.0 {
                ((floats[idx] - min) / span * (SPARK_LEVELS.len() - 1) as f64).round() as usize
            } else {
                SPARK_LEVELS.len() / 2
            };
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

/// JSON payload for `simulate --format json`.
#[derive(Debug, Serialize)]
pub struct SimulationReport<'a> {
    pub seed: u64,
    pub result: &'a SimulationResult,
    pub insights: &'a [Insight],
}

/// JSON payload for `streaks --format json`.
#[derive(Debug, Serialize)]
pub struct StreakReport<'a> {
    pub sample_size: u64,
    pub estimates: &'a [StreakEstimate],
}
