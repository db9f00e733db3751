//! Indicator error types.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// The input series cannot be used for any calculation.
    InvalidInput(String),
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::InvalidInput(message) => write!(f, "invalid input: {}", message),
        }
    }
}

impl std::error::Error for IndicatorError {}
