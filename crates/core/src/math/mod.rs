//! # Mathematical Functions
//!
//! Pure fixed-point functions over Q96 sqrt prices and Q128 fee
//! accumulators.

pub mod big_int;
pub mod fee_math;
pub mod liquidity_math;
pub mod price_math;
pub mod tick_math;

// Re-export commonly used functions
pub use big_int::*;
pub use fee_math::*;
pub use liquidity_math::*;
pub use price_math::*;
pub use tick_math::*;
