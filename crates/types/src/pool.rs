//! # Pool Records
//!
//! Fee tiers, protocol tagging and the concentrated-liquidity pool snapshot
//! read by the engine.

use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::TypeError;
use crate::token::TokenPair;

// ============================================================================
// Fee Tiers
// ============================================================================

/// Pool fee tier in hundredths of a basis point, as pools advertise it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum FeeTier {
    /// 0.01%
    Lowest,
    /// 0.05%
    Low,
    /// 0.3%
    Medium,
    /// 1%
    High,
}

impl FeeTier {
    pub const ALL: [FeeTier; 4] = [FeeTier::Lowest, FeeTier::Low, FeeTier::Medium, FeeTier::High];

    pub const fn fee(&self) -> u32 {
        match self {
            FeeTier::Lowest => 100,
            FeeTier::Low => 500,
            FeeTier::Medium => 3000,
            FeeTier::High => 10000,
        }
    }

    /// Minimum tick granularity for positions in this tier
    pub const fn tick_spacing(&self) -> i32 {
        match self {
            FeeTier::Lowest => 1,
            FeeTier::Low => 10,
            FeeTier::Medium => 60,
            FeeTier::High => 200,
        }
    }

    /// Fee tier that uses a given tick spacing
    pub fn from_tick_spacing(spacing: i32) -> Result<Self, TypeError> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.tick_spacing() == spacing)
            .ok_or(TypeError::InvalidTickSpacing { spacing })
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = TypeError;

    fn try_from(fee: u32) -> Result<Self, Self::Error> {
        match fee {
            100 => Ok(FeeTier::Lowest),
            500 => Ok(FeeTier::Low),
            3000 => Ok(FeeTier::Medium),
            10000 => Ok(FeeTier::High),
            _ => Err(TypeError::UnsupportedFeeTier { fee }),
        }
    }
}

impl From<FeeTier> for u32 {
    fn from(tier: FeeTier) -> u32 {
        tier.fee()
    }
}

// ============================================================================
// Protocol-tagged Pool Snapshot
// ============================================================================

/// Protocols whose pools share the Uniswap V3 pricing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Protocol {
    UniswapV3,
    SushiSwapV3,
}

/// Uniswap-V3-shaped numeric state of a pool at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClPoolState {
    pub tokens: TokenPair,
    pub fee_tier: FeeTier,
    /// sqrt(price) as Q96
    pub sqrt_price_x96: BigUint,
    pub tick: i32,
    /// In-range liquidity
    pub liquidity: BigUint,
    /// Cumulative fees per unit of liquidity, Q128
    pub fee_growth_global_0_x128: BigUint,
    pub fee_growth_global_1_x128: BigUint,
}

/// Pool snapshot as supplied by the ingestion layer, tagged by protocol
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "protocol", content = "state"))]
pub enum PoolSnapshot {
    UniswapV3(ClPoolState),
    SushiSwapV3(ClPoolState),
}

impl PoolSnapshot {
    pub fn protocol(&self) -> Protocol {
        match self {
            PoolSnapshot::UniswapV3(_) => Protocol::UniswapV3,
            PoolSnapshot::SushiSwapV3(_) => Protocol::SushiSwapV3,
        }
    }

    /// The curve fields, whichever protocol supplied them
    pub fn state(&self) -> &ClPoolState {
        match self {
            PoolSnapshot::UniswapV3(state) | PoolSnapshot::SushiSwapV3(state) => state,
        }
    }
}

// ============================================================================
// Tick Snapshot
// ============================================================================

/// Fee growth recorded on the far side of an initialized tick, Q128
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickSnapshot {
    pub fee_growth_outside_0_x128: BigUint,
    pub fee_growth_outside_1_x128: BigUint,
}

impl TickSnapshot {
    pub fn new(fee_growth_outside_0_x128: BigUint, fee_growth_outside_1_x128: BigUint) -> Self {
        Self {
            fee_growth_outside_0_x128,
            fee_growth_outside_1_x128,
        }
    }
}
