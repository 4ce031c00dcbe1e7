//! Position phase and quote-denominated value

use clmath_types::{Orientation, Phase};
use num_bigint::BigUint;

use crate::errors::CoreResult;
use crate::math::big_int::pow10;
use crate::math::liquidity_math::amounts_from_liquidity;
use crate::math::tick_math::tick_to_sqrt_price;

/// Classify the current tick against `[tick_lower, tick_upper)`
pub fn determine_phase(tick_current: i32, tick_lower: i32, tick_upper: i32) -> Phase {
    if tick_current < tick_lower {
        Phase::Below
    } else if tick_current >= tick_upper {
        Phase::Above
    } else {
        Phase::InRange
    }
}

/// Value of a position in quote raw units.
///
/// Token amounts are floored. `current_price` is quote raw units per whole
/// base token; the base-token amount is converted at that price and added
/// to the quote-token amount.
pub fn position_value(
    liquidity: &BigUint,
    sqrt_price_current: &BigUint,
    tick_lower: i32,
    tick_upper: i32,
    current_price: &BigUint,
    orientation: Orientation,
    base_decimals: u8,
) -> CoreResult<BigUint> {
    let sqrt_lower = tick_to_sqrt_price(tick_lower)?;
    let sqrt_upper = tick_to_sqrt_price(tick_upper)?;
    let amounts = amounts_from_liquidity(liquidity, sqrt_price_current, &sqrt_lower, &sqrt_upper, false);

    let scale = pow10(base_decimals);
    let value = if orientation.base_is_token0 {
        amounts.amount0 * current_price / scale + amounts.amount1
    } else {
        amounts.amount0 + amounts.amount1 * current_price / scale
    };

    Ok(value)
}
