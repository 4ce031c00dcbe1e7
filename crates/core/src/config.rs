//! # Curve Configuration
//!
//! Sampling parameters for PnL curve generation, validated up front so
//! curve construction only ever sees sane inputs.

use num_bigint::BigUint;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{BPS_DENOMINATOR, DEFAULT_CURVE_POINTS, DEFAULT_RANGE_WIDTH_BPS};
use crate::errors::{CoreError, CoreResult};

/// Inclusive price interval in quote raw units per whole base token
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceRange {
    pub min: BigUint,
    pub max: BigUint,
}

impl PriceRange {
    /// Create a validated price range
    pub fn new(min: BigUint, max: BigUint) -> CoreResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Requires `0 < min < max`
    pub fn validate(&self) -> CoreResult<()> {
        if self.min.is_zero() {
            return Err(self.invalid("minimum price must be positive"));
        }
        if self.min >= self.max {
            return Err(self.invalid("minimum must be below maximum"));
        }
        Ok(())
    }

    /// max - min
    pub fn width(&self) -> BigUint {
        crate::math::saturating_sub(&self.max, &self.min)
    }

    fn invalid(&self, reason: &'static str) -> CoreError {
        CoreError::InvalidPriceRange {
            min: self.min.to_string(),
            max: self.max.to_string(),
            reason,
        }
    }
}

/// PnL curve sampling configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurveConfig {
    /// Number of intervals; the curve has `num_points + 1` samples
    pub num_points: usize,

    /// Half-width of a range centred on a price (basis points)
    pub range_width_bps: u32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_CURVE_POINTS,
            range_width_bps: DEFAULT_RANGE_WIDTH_BPS,
        }
    }
}

impl CurveConfig {
    /// Validate configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_points == 0 {
            return Err(CoreError::invalid_parameter("num_points", "0", "greater than 0"));
        }

        if self.range_width_bps == 0 || self.range_width_bps >= BPS_DENOMINATOR {
            return Err(CoreError::invalid_parameter(
                "range_width_bps",
                &self.range_width_bps.to_string(),
                &format!("between 1 and {}", BPS_DENOMINATOR - 1),
            ));
        }

        Ok(())
    }

    /// `center * (1 -/+ range_width_bps / 10000)`, floor on both ends
    pub fn price_range_around(&self, center: &BigUint) -> CoreResult<PriceRange> {
        self.validate()?;

        let denominator = BigUint::from(BPS_DENOMINATOR);
        let min = center * (BPS_DENOMINATOR - self.range_width_bps) / &denominator;
        let max = center * (BPS_DENOMINATOR + self.range_width_bps) / &denominator;

        PriceRange::new(min, max)
    }

    /// Parse and validate configuration from TOML text
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        let config: CurveConfig =
            toml::from_str(content).map_err(|e| CoreError::ConfigParse(format!("invalid curve config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Serialize configuration to TOML text
    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string_pretty(self).map_err(|e| CoreError::ConfigParse(format!("failed to serialize config: {}", e)))
    }
}
