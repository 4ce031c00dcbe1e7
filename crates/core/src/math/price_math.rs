//! # Price Math
//!
//! Conversions between Q96 sqrt prices and decimal prices, and from a
//! decimal price back to a (usable) tick.
//!
//! A decimal price is an integer count of quote raw units per whole base
//! token, i.e. per `10^base_decimals` base raw units. Which pool token is
//! the base is carried by [`Orientation`]; every conversion here branches
//! on it.

use clmath_types::Orientation;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::errors::{CoreError, CoreResult};
use crate::math::big_int::{mul_div, pow10, q192, Rounding};
use crate::math::tick_math::{
    max_sqrt_ratio, min_sqrt_ratio, nearest_usable_tick, sqrt_price_to_tick, tick_to_sqrt_price,
};

// ============================================================================
// Sqrt Price -> Decimal Price
// ============================================================================

/// token1 raw units per `10^token0_decimals` token0 raw units:
/// `sqrt^2 * 10^d0 / 2^192`, floor
pub fn sqrt_price_to_token1_per_token0(sqrt_price_x96: &BigUint, token0_decimals: u8) -> BigUint {
    let price_x192 = sqrt_price_x96 * sqrt_price_x96;
    mul_div(&price_x192, &pow10(token0_decimals), &q192(), Rounding::Down).unwrap_or_default()
}

/// token0 raw units per `10^token1_decimals` token1 raw units:
/// `2^192 * 10^d1 / sqrt^2`, floor.
///
/// Not the exact inverse of [`sqrt_price_to_token1_per_token0`]; both sides
/// floor independently. A zero sqrt price yields zero.
pub fn sqrt_price_to_token0_per_token1(sqrt_price_x96: &BigUint, token1_decimals: u8) -> BigUint {
    let price_x192 = sqrt_price_x96 * sqrt_price_x96;
    mul_div(&q192(), &pow10(token1_decimals), &price_x192, Rounding::Down).unwrap_or_default()
}

/// Price of the base token in quote raw units per whole base token
pub fn sqrt_price_to_price(sqrt_price_x96: &BigUint, orientation: Orientation, base_decimals: u8) -> BigUint {
    if orientation.base_is_token0 {
        sqrt_price_to_token1_per_token0(sqrt_price_x96, base_decimals)
    } else {
        sqrt_price_to_token0_per_token1(sqrt_price_x96, base_decimals)
    }
}

/// Price of the base token at a tick
pub fn tick_to_price(tick: i32, orientation: Orientation, base_decimals: u8) -> CoreResult<BigUint> {
    let sqrt_price_x96 = tick_to_sqrt_price(tick)?;
    Ok(sqrt_price_to_price(&sqrt_price_x96, orientation, base_decimals))
}

// ============================================================================
// Decimal Price -> Sqrt Price
// ============================================================================

/// floor(sqrt(amount1 * 2^192 / amount0)), the Q96 sqrt of amount1/amount0
pub fn encode_sqrt_ratio_x96(amount1: &BigUint, amount0: &BigUint) -> CoreResult<BigUint> {
    if amount0.is_zero() || amount1.is_zero() {
        return Err(CoreError::invalid_price(
            format!("{amount1}/{amount0}"),
            "ratio terms must be positive",
        ));
    }

    let ratio_x192 = (amount1 << 192usize) / amount0;
    Ok(ratio_x192.sqrt())
}

/// Q96 sqrt price implied by a decimal price
pub fn price_to_sqrt_price(price: &BigUint, orientation: Orientation, base_decimals: u8) -> CoreResult<BigUint> {
    if price.is_zero() {
        return Err(CoreError::invalid_price(price, "price must be positive"));
    }

    // One whole base token against `price` quote raw units
    let base_amount = pow10(base_decimals);
    if orientation.base_is_token0 {
        encode_sqrt_ratio_x96(price, &base_amount)
    } else {
        encode_sqrt_ratio_x96(&base_amount, price)
    }
}

// ============================================================================
// Decimal Price -> Tick
// ============================================================================

/// Floor tick at a sqrt price, clamping prices beyond the supported range
/// to the boundary tick. The flag reports whether clamping happened.
fn floor_tick_clamped(sqrt_price_x96: &BigUint) -> CoreResult<(i32, bool)> {
    if *sqrt_price_x96 < min_sqrt_ratio() {
        log::debug!("sqrt price {} below MIN_SQRT_RATIO, clamping to MIN_TICK", sqrt_price_x96);
        return Ok((MIN_TICK, true));
    }
    if *sqrt_price_x96 >= max_sqrt_ratio() {
        log::debug!("sqrt price {} at or above MAX_SQRT_RATIO, clamping to MAX_TICK", sqrt_price_x96);
        return Ok((MAX_TICK, true));
    }
    Ok((sqrt_price_to_tick(sqrt_price_x96)?, false))
}

/// Tick for a decimal price: floor tick first, then snapped to the nearest
/// multiple of `tick_spacing`.
///
/// Near spacing boundaries this can differ from
/// [`price_to_closest_usable_tick`], which first picks whichever of the two
/// neighbouring ticks is closer in sqrt price.
pub fn price_to_tick(
    price: &BigUint,
    tick_spacing: i32,
    orientation: Orientation,
    base_decimals: u8,
) -> CoreResult<i32> {
    let sqrt_price_x96 = price_to_sqrt_price(price, orientation, base_decimals)?;
    let (tick, _) = floor_tick_clamped(&sqrt_price_x96)?;
    nearest_usable_tick(tick, tick_spacing)
}

/// Tick for a decimal price, choosing between the floor tick and the next
/// tick by actual sqrt price distance before snapping to `tick_spacing`.
/// Ties keep the floor tick.
pub fn price_to_closest_usable_tick(
    price: &BigUint,
    tick_spacing: i32,
    orientation: Orientation,
    base_decimals: u8,
) -> CoreResult<i32> {
    let sqrt_price_x96 = price_to_sqrt_price(price, orientation, base_decimals)?;
    let (mut tick, clamped) = floor_tick_clamped(&sqrt_price_x96)?;

    if !clamped && tick < MAX_TICK {
        let sqrt_floor = tick_to_sqrt_price(tick)?;
        let sqrt_next = tick_to_sqrt_price(tick + 1)?;
        // sqrt_floor <= sqrt_price_x96 < sqrt_next by construction
        if &sqrt_price_x96 - &sqrt_floor > &sqrt_next - &sqrt_price_x96 {
            tick += 1;
        }
    }

    nearest_usable_tick(tick, tick_spacing)
}

// ============================================================================
// Human Decimal Input
// ============================================================================

/// Parse a human decimal price such as `"1834.25"` into quote raw units per
/// whole base token. Fractional digits beyond `quote_decimals` are
/// truncated.
pub fn parse_price(text: &str, quote_decimals: u8) -> CoreResult<BigUint> {
    let trimmed = text.trim();
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(CoreError::invalid_price(text, "expected an unsigned decimal number"));
    }

    let decimals = usize::from(quote_decimals);
    let mut digits = String::with_capacity(whole.len() + decimals);
    digits.push_str(whole);
    digits.extend(fraction.chars().take(decimals));
    for _ in fraction.len()..decimals {
        digits.push('0');
    }

    let price = BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default();
    if price.is_zero() {
        return Err(CoreError::invalid_price(text, "price must be positive"));
    }
    Ok(price)
}
