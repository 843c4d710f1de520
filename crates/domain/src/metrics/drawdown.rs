use rust_decimal::Decimal;

/// Percentage decline from `peak` to `equity`.
///
/// formula: (peak - equity) / peak * 100
///
/// Returns zero when the peak is zero or negative.
pub fn drawdown_pct(peak: Decimal, equity: Decimal) -> Decimal {
    if peak <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (peak - equity) / peak * Decimal::ONE_HUNDRED
}

/// Drawdown at every point of an equity curve, in percent.
///
/// The running peak includes the current point, so the first point always
/// has zero drawdown.
pub fn drawdown_series(equity_curve: &[Decimal]) -> Vec<Decimal> {
    let mut series = Vec::with_capacity(equity_curve.len());
    let mut peak: Option<Decimal> = None;
    for &equity in equity_curve {
        let current_peak = peak.map_or(equity, |p| p.max(equity));
        peak = Some(current_peak);
        series.push(drawdown_pct(current_peak, equity));
    }
    series
}

/// Largest drawdown over an equity curve, in percent. Zero for an empty curve.
pub fn max_drawdown_pct(equity_curve: &[Decimal]) -> Decimal {
    drawdown_series(equity_curve)
        .into_iter()
        .max()
        .unwrap_or(Decimal::ZERO)
}
