//! # Position Records
//!
//! Position snapshots, token amount pairs, range phase and the PnL curve
//! sample record.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw (undenominated) amounts of token0 and token1
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenAmounts {
    pub amount0: BigUint,
    pub amount1: BigUint,
}

impl TokenAmounts {
    pub fn new(amount0: BigUint, amount1: BigUint) -> Self {
        Self { amount0, amount1 }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.amount0.is_zero() && self.amount1.is_zero()
    }
}

/// A position's liquidity range and its last fee checkpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSnapshot {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: BigUint,
    /// Fee growth inside the range at the last fee-affecting interaction, Q128
    pub fee_growth_inside_0_last_x128: BigUint,
    pub fee_growth_inside_1_last_x128: BigUint,
    /// Fees already credited but not collected
    pub tokens_owed_0: BigUint,
    pub tokens_owed_1: BigUint,
}

/// Where the current price sits relative to a position's range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Phase {
    /// Current tick below the lower tick; the position holds only token0
    Below,
    /// Lower tick inclusive, upper tick exclusive
    InRange,
    /// Current tick at or above the upper tick; only token1
    Above,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Below => "below",
            Phase::InRange => "in-range",
            Phase::Above => "above",
        };
        f.write_str(name)
    }
}

/// One sample of a PnL curve. Derived for charting, never persisted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PnlPoint {
    /// Quote raw units per whole base token
    pub price: BigUint,
    /// Position value in quote raw units
    pub position_value: BigUint,
    pub pnl: BigInt,
    pub pnl_percent: f64,
    /// Range phase of the sample's tick, not of its price. With base token1
    /// ticks fall as price rises, so the curve runs above, in-range, below.
    pub phase: Phase,
}
