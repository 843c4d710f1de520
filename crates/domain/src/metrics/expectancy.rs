use rust_decimal::Decimal;

/// Expected profit per unit of money risked.
///
/// formula: p * b - (1 - p) * 1
///
/// # Arguments
///
/// * `win_rate` - Probability of a winning trade (p)
/// * `reward_risk_ratio` - Units won per unit risked on a winner (b)
///
/// # Returns
///
/// * `Decimal` - Expected return per unit risked. This is a property of the
///   parameters, not of any simulated path.
pub fn expectancy_per_unit_risk(win_rate: Decimal, reward_risk_ratio: Decimal) -> Decimal {
    win_rate.saturating_mul(reward_risk_ratio) - (Decimal::ONE - win_rate)
}

/// Break-even win rate for a reward-to-risk ratio.
///
/// Solves `p * b - (1 - p) = 0`, giving `1 / (1 + b)`.
///
/// Callers pass a validated, positive ratio. A ratio too large for `1 + b`
/// to be represented yields zero, the limit as `b` grows; so does `-1`.
pub fn minimum_win_rate(reward_risk_ratio: Decimal) -> Decimal {
    match Decimal::ONE.checked_add(reward_risk_ratio) {
        Some(denominator) if !denominator.is_zero() => Decimal::ONE / denominator,
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_expectancy() {
        assert_eq!(expectancy_per_unit_risk(dec!(0.5), dec!(2)), dec!(0.5));
        assert_eq!(expectancy_per_unit_risk(dec!(0.5), dec!(1)), dec!(0));
        assert_eq!(expectancy_per_unit_risk(dec!(0.3), dec!(1)), dec!(-0.4));
    }

    #[test]
    fn test_minimum_win_rate() {
        assert_eq!(minimum_win_rate(dec!(1)), dec!(0.5));

        let third = minimum_win_rate(dec!(2));
        assert!((third - dec!(0.3333333333)).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_extreme_ratios() {
        assert_eq!(minimum_win_rate(Decimal::MAX), dec!(0));
        assert_eq!(minimum_win_rate(dec!(-1)), dec!(0));
        assert!(minimum_win_rate(dec!(1000000)) > dec!(0));
        assert!(expectancy_per_unit_risk(dec!(0.5), Decimal::MAX) > dec!(0));
        assert!(expectancy_per_unit_risk(dec!(0.999), Decimal::MAX) > dec!(0));
    }

    #[test]
    fn test_expectancy_is_zero_at_minimum_win_rate() {
        for ratio in [dec!(0.5), dec!(1), dec!(3), dec!(4)] {
            let p = minimum_win_rate(ratio);
            assert!(expectancy_per_unit_risk(p, ratio).abs() < dec!(0.000000001));
        }
    }
}
