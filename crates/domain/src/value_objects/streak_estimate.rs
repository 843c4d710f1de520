use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expected longest run of consecutive losses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakEstimate {
    pub win_rate: Decimal,
    pub sample_size: u64,
    /// Unrounded estimate; may be fractional.
    pub expected_max_streak: f64,
}
