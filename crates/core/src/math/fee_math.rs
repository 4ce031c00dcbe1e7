//! # Fee Math
//!
//! Fee growth accounting over Q128 accumulators: growth inside a tick range
//! from per-tick outside checkpoints, and the token amounts owed for a
//! growth delta.
//!
//! Accumulators wrap in 256-bit on chain. Every subtraction here floors at
//! zero through [`safe_difference`] instead of wrapping.

use clmath_types::{ClPoolState, PositionSnapshot, TickSnapshot, TokenAmounts};
use num_bigint::BigUint;

use crate::math::big_int::{mul_div, q128, saturating_sub, Rounding};

/// `a - b`, or zero when `b >= a`
pub fn safe_difference(a: &BigUint, b: &BigUint) -> BigUint {
    saturating_sub(a, b)
}

/// Fee growth inside `[tick_lower, tick_upper)` for a single token
pub fn fee_growth_inside_single(
    tick_current: i32,
    tick_lower: i32,
    tick_upper: i32,
    growth_global: &BigUint,
    growth_outside_lower: &BigUint,
    growth_outside_upper: &BigUint,
) -> BigUint {
    let below = if tick_current >= tick_lower {
        growth_outside_lower.clone()
    } else {
        safe_difference(growth_global, growth_outside_lower)
    };

    let above = if tick_current < tick_upper {
        growth_outside_upper.clone()
    } else {
        safe_difference(growth_global, growth_outside_upper)
    };

    safe_difference(&safe_difference(growth_global, &below), &above)
}

/// Fee growth inside a tick range for both tokens, Q128
pub fn fee_growth_inside(
    tick_current: i32,
    tick_lower: i32,
    tick_upper: i32,
    growth_global_0: &BigUint,
    growth_global_1: &BigUint,
    lower: &TickSnapshot,
    upper: &TickSnapshot,
) -> (BigUint, BigUint) {
    let inside_0 = fee_growth_inside_single(
        tick_current,
        tick_lower,
        tick_upper,
        growth_global_0,
        &lower.fee_growth_outside_0_x128,
        &upper.fee_growth_outside_0_x128,
    );
    let inside_1 = fee_growth_inside_single(
        tick_current,
        tick_lower,
        tick_upper,
        growth_global_1,
        &lower.fee_growth_outside_1_x128,
        &upper.fee_growth_outside_1_x128,
    );
    (inside_0, inside_1)
}

/// Raw token amount earned since the last checkpoint:
/// `safe_difference(current, last) * liquidity / 2^128`, floor
pub fn incremental_fees_owed(inside_current: &BigUint, inside_last: &BigUint, liquidity: &BigUint) -> BigUint {
    let delta = safe_difference(inside_current, inside_last);
    mul_div(&delta, liquidity, &q128(), Rounding::Down).unwrap_or_default()
}

/// Total uncollected fees for a position: fees accrued since its last
/// checkpoint plus whatever was already credited to it
pub fn fees_owed(
    position: &PositionSnapshot,
    pool: &ClPoolState,
    lower: &TickSnapshot,
    upper: &TickSnapshot,
) -> TokenAmounts {
    let (inside_0, inside_1) = fee_growth_inside(
        pool.tick,
        position.tick_lower,
        position.tick_upper,
        &pool.fee_growth_global_0_x128,
        &pool.fee_growth_global_1_x128,
        lower,
        upper,
    );

    let accrued_0 = incremental_fees_owed(&inside_0, &position.fee_growth_inside_0_last_x128, &position.liquidity);
    let accrued_1 = incremental_fees_owed(&inside_1, &position.fee_growth_inside_1_last_x128, &position.liquidity);

    TokenAmounts::new(
        accrued_0 + &position.tokens_owed_0,
        accrued_1 + &position.tokens_owed_1,
    )
}
