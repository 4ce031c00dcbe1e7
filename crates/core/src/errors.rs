//! # Core Error Types
//!
//! Only caller contract violations are errors. Degenerate numeric input
//! (zero liquidity, zero amounts, collapsed or inverted bounds) resolves to
//! a zero result and never reaches this enum.

use clmath_types::TypeError;
use thiserror::Error;

/// Engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    // ========================================================================
    // Price and Tick Errors
    // ========================================================================

    #[error("Invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: &'static str },

    #[error("Tick {tick} out of range [{min}, {max}]")]
    TickOutOfRange { tick: i32, min: i32, max: i32 },

    #[error("Sqrt price {sqrt_price} outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)")]
    SqrtPriceOutOfRange { sqrt_price: String },

    #[error("Invalid tick spacing: {spacing}")]
    InvalidTickSpacing { spacing: i32 },

    #[error("Invalid price range: {min} to {max} ({reason})")]
    InvalidPriceRange {
        min: String,
        max: String,
        reason: &'static str,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid parameter '{parameter}': got '{value}', expected '{expected}'")]
    InvalidParameter {
        parameter: String,
        value: String,
        expected: String,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    // ========================================================================
    // Boundary Errors
    // ========================================================================

    #[error(transparent)]
    Types(#[from] TypeError),
}

/// Result type using core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create an invalid price error
    pub fn invalid_price(value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidPrice {
            value: value.to_string(),
            reason,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &str, value: &str, expected: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }
}
