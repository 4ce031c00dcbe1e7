//! # CL Math Core - Concentrated Liquidity Engine
//!
//! Deterministic fixed-point math for positions on a Uniswap-V3-style
//! curve. It provides:
//!
//! - Tick, Q96 sqrt price and decimal price conversions
//! - Liquidity <-> token amount conversions and investment sizing
//! - Fee growth accounting over Q128 accumulators
//! - Position valuation, PnL and PnL curves
//!
//! Every operation is a pure function of its inputs.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization for all records and TOML curve configuration
//! - `parallel`: Parallel PnL curve evaluation with rayon

pub mod config;
pub mod constants;
pub mod errors;
pub mod math;
pub mod position;

// Re-export commonly used items
pub use clmath_types::{
    ClPoolState, FeeTier, Orientation, Phase, PnlPoint, PoolSnapshot, PositionSnapshot, Protocol, TickSnapshot, Token,
    TokenAmounts, TokenId, TokenPair, TypeError, TypeResult,
};
pub use config::{CurveConfig, PriceRange};
pub use constants::*;
pub use errors::{CoreError, CoreResult};
pub use math::*;
pub use position::*;
