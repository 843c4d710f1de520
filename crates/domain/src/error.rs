//! Error types shared by the estimator and the simulator.

use std::fmt::Display;
use thiserror::Error;

/// Errors produced by the statistics engine.
///
/// Every failure is caused by bad input, so there is a single variant naming
/// the offending field, the constraint it violated and the value received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A parameter violated its documented range.
    #[error("{field} must be {constraint}, got {value}")]
    InvalidParameter {
        /// Name of the rejected field.
        field: &'static str,
        /// Human readable constraint, e.g. `in (0, 1)`.
        constraint: &'static str,
        /// The rejected value, rendered for display.
        value: String,
    },
}

impl SimulationError {
    /// Builds an [`SimulationError::InvalidParameter`].
    pub fn invalid(field: &'static str, constraint: &'static str, value: impl Display) -> Self {
        Self::InvalidParameter {
            field,
            constraint,
            value: value.to_string(),
        }
    }

    /// Returns the name of the rejected field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => field,
        }
    }
}
