//! Closed-form estimate of the longest expected losing streak.
//!
//! Each trade is treated as an independent Bernoulli trial with loss
//! probability `1 - p`. The longest run of losses in `n` trials is then
//! approximately `ln(n) / ln(1 / (1 - p))`. No randomness is involved.

use expectancy_domain::value_objects::validate_win_rate;
use expectancy_domain::{SimulationError, StreakEstimate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive as _;
use tracing::debug;

/// Win rates swept by [`StreakEstimator::table`]: 5% to 95% in 5% steps.
#[must_use]
pub fn standard_win_rates() -> Vec<Decimal> {
    (1..=19).map(|step| Decimal::new(step * 5, 2)).collect()
}

/// Estimates losing streaks for single win rates or a sweep of them.
#[derive(Debug, Clone)]
pub struct StreakEstimator {
    win_rates: Vec<Decimal>,
}

impl Default for StreakEstimator {
    fn default() -> Self {
        Self {
            win_rates: standard_win_rates(),
        }
    }
}

impl StreakEstimator {
    /// Creates an estimator that sweeps [`standard_win_rates`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the win rates used by [`Self::table`].
    #[must_use]
    pub fn with_win_rates(mut self, win_rates: Vec<Decimal>) -> Self {
        self.win_rates = win_rates;
        self
    }

    /// Win rates used by [`Self::table`].
    #[must_use]
    pub fn win_rates(&self) -> &[Decimal] {
        &self.win_rates
    }

    /// Expected maximum losing streak over `sample_size` trades.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] when `win_rate` is not in
    /// (0, 1) or `sample_size` is zero.
    pub fn estimate_max_losing_streak(
        &self,
        win_rate: Decimal,
        sample_size: u64,
    ) -> Result<StreakEstimate, SimulationError> {
        validate_win_rate(win_rate)?;
        if sample_size == 0 {
            return Err(SimulationError::invalid(
                "sample_size",
                "at least 1",
                sample_size,
            ));
        }

        let p = win_rate
            .to_f64()
            .ok_or_else(|| SimulationError::invalid("win_rate", "representable as f64", win_rate))?;
        // ln(1 / (1 - p)) == -ln(1 - p); ln_1p keeps precision for small p.
        // A rate that rounds to 1.0 as f64 gives an infinite denominator and
        // a streak of 0, the limit as p approaches 1.
        let denominator = -(-p).ln_1p();
        if denominator.is_nan() || denominator <= 0.0 {
            return Err(SimulationError::invalid(
                "win_rate",
                "representable as f64 in (0, 1)",
                win_rate,
            ));
        }

        let expected_max_streak = (sample_size as f64).ln() / denominator;
        debug!(%win_rate, sample_size, expected_max_streak, "Estimated losing streak");

        Ok(StreakEstimate {
            win_rate,
            sample_size,
            expected_max_streak,
        })
    }

    /// Evaluates the estimator at every configured win rate, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first configured win rate outside (0, 1), or when
    /// `sample_size` is zero.
    pub fn table(&self, sample_size: u64) -> Result<Vec<StreakEstimate>, SimulationError> {
        self.win_rates
            .iter()
            .map(|&win_rate| self.estimate_max_losing_streak(win_rate, sample_size))
            .collect()
    }
}

/// Expected maximum losing streak for one win rate.
///
/// # Errors
///
/// See [`StreakEstimator::estimate_max_losing_streak`].
pub fn estimate_max_losing_streak(
    win_rate: Decimal,
    sample_size: u64,
) -> Result<StreakEstimate, SimulationError> {
    StreakEstimator::new().estimate_max_losing_streak(win_rate, sample_size)
}

/// Expected maximum losing streak at each of [`standard_win_rates`].
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] when `sample_size` is zero.
pub fn streak_table(sample_size: u64) -> Result<Vec<StreakEstimate>, SimulationError> {
    StreakEstimator::new().table(sample_size)
}
