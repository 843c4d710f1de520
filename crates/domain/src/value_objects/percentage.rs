use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A ratio stored as a fraction (`0.4` is 40%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(pub Decimal);

impl Percentage {
    const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

    pub fn from_fraction(fraction: Decimal) -> Self {
        Self(fraction)
    }

    /// Converts a user-facing percent figure (`40` for 40%) to a fraction.
    pub fn from_percent(percent: Decimal) -> Self {
        Self(percent / Self::HUNDRED)
    }

    pub fn as_fraction(&self) -> Decimal {
        self.0
    }

    pub fn as_percent(&self) -> Decimal {
        self.0 * Self::HUNDRED
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.as_percent().round_dp(2))
    }
}
