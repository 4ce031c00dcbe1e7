//! # Liquidity Math
//!
//! Liquidity <-> token amount conversions for a concentrated-liquidity
//! range, and liquidity sizing from an investment budget.
//!
//! Degenerate input (zero liquidity or amount, collapsed or inverted
//! bounds) yields zero rather than an error: price sweeps routinely run
//! past a position's edges and must not abort.

use clmath_types::TokenAmounts;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::math::big_int::{div_rounding, mul_div, q192, q96, Rounding};

// ============================================================================
// Single-token Deltas
// ============================================================================

/// Order a bound pair, or `None` when it is collapsed or touches zero
fn ordered_bounds<'a>(sqrt_a: &'a BigUint, sqrt_b: &'a BigUint) -> Option<(&'a BigUint, &'a BigUint)> {
    let (low, high) = if sqrt_a <= sqrt_b { (sqrt_a, sqrt_b) } else { (sqrt_b, sqrt_a) };
    if low == high || low.is_zero() {
        return None;
    }
    Some((low, high))
}

/// token0 held by `liquidity` between two sqrt prices:
/// `liquidity * (high - low) * 2^96 / (high * low)`
pub fn amount0_delta(liquidity: &BigUint, sqrt_a: &BigUint, sqrt_b: &BigUint, round_up: bool) -> BigUint {
    let Some((low, high)) = ordered_bounds(sqrt_a, sqrt_b) else {
        return BigUint::zero();
    };
    if liquidity.is_zero() {
        return BigUint::zero();
    }

    let numerator = (liquidity << 96usize) * (high - low);
    div_rounding(&numerator, &(high * low), Rounding::from_round_up(round_up)).unwrap_or_default()
}

/// token1 held by `liquidity` between two sqrt prices:
/// `liquidity * (high - low) / 2^96`
pub fn amount1_delta(liquidity: &BigUint, sqrt_a: &BigUint, sqrt_b: &BigUint, round_up: bool) -> BigUint {
    let Some((low, high)) = ordered_bounds(sqrt_a, sqrt_b) else {
        return BigUint::zero();
    };
    if liquidity.is_zero() {
        return BigUint::zero();
    }

    mul_div(liquidity, &(high - low), &q96(), Rounding::from_round_up(round_up)).unwrap_or_default()
}

/// Token amounts represented by `liquidity` at `sqrt_current` over
/// `[sqrt_lower, sqrt_upper]`.
///
/// At or below the range everything is token0; at or above it everything is
/// token1; in range token0 covers `[current, upper]` and token1 covers
/// `[lower, current]`. `round_up` selects ceiling division throughout.
pub fn amounts_from_liquidity(
    liquidity: &BigUint,
    sqrt_current: &BigUint,
    sqrt_lower: &BigUint,
    sqrt_upper: &BigUint,
    round_up: bool,
) -> TokenAmounts {
    if liquidity.is_zero() || sqrt_upper <= sqrt_lower {
        log::trace!("degenerate range or zero liquidity, returning zero amounts");
        return TokenAmounts::zero();
    }

    if sqrt_current <= sqrt_lower {
        TokenAmounts::new(
            amount0_delta(liquidity, sqrt_lower, sqrt_upper, round_up),
            BigUint::zero(),
        )
    } else if sqrt_current >= sqrt_upper {
        TokenAmounts::new(
            BigUint::zero(),
            amount1_delta(liquidity, sqrt_lower, sqrt_upper, round_up),
        )
    } else {
        TokenAmounts::new(
            amount0_delta(liquidity, sqrt_current, sqrt_upper, round_up),
            amount1_delta(liquidity, sqrt_lower, sqrt_current, round_up),
        )
    }
}

// ============================================================================
// Amounts -> Liquidity
// ============================================================================

/// Liquidity supported by `amount0` between two sqrt prices:
/// `amount0 * low * high / (2^96 * (high - low))`, floor
pub fn liquidity_from_amount0(sqrt_a: &BigUint, sqrt_b: &BigUint, amount0: &BigUint) -> BigUint {
    let Some((low, high)) = ordered_bounds(sqrt_a, sqrt_b) else {
        return BigUint::zero();
    };

    let numerator = amount0 * low * high;
    let denominator = q96() * (high - low);
    div_rounding(&numerator, &denominator, Rounding::Down).unwrap_or_default()
}

/// Liquidity supported by `amount1` between two sqrt prices:
/// `amount1 * 2^96 / (high - low)`, floor
pub fn liquidity_from_amount1(sqrt_a: &BigUint, sqrt_b: &BigUint, amount1: &BigUint) -> BigUint {
    let Some((low, high)) = ordered_bounds(sqrt_a, sqrt_b) else {
        return BigUint::zero();
    };

    mul_div(amount1, &q96(), &(high - low), Rounding::Down).unwrap_or_default()
}

/// Maximum liquidity that `amount0` and `amount1` can fund at
/// `sqrt_current` over `[sqrt_lower, sqrt_upper]`.
///
/// In range the scarcer token binds: the result is the minimum of the two
/// single-token liquidities. Always floors, so the result never overstates
/// what the amounts can back.
pub fn liquidity_from_amounts(
    sqrt_current: &BigUint,
    sqrt_lower: &BigUint,
    sqrt_upper: &BigUint,
    amount0: &BigUint,
    amount1: &BigUint,
) -> BigUint {
    if sqrt_upper <= sqrt_lower {
        log::trace!("degenerate range, returning zero liquidity");
        return BigUint::zero();
    }

    if sqrt_current <= sqrt_lower {
        liquidity_from_amount0(sqrt_lower, sqrt_upper, amount0)
    } else if sqrt_current >= sqrt_upper {
        liquidity_from_amount1(sqrt_lower, sqrt_upper, amount1)
    } else {
        let liquidity0 = liquidity_from_amount0(sqrt_current, sqrt_upper, amount0);
        let liquidity1 = liquidity_from_amount1(sqrt_lower, sqrt_current, amount1);
        liquidity0.min(liquidity1)
    }
}

// ============================================================================
// Investment Budget Sizing
// ============================================================================

/// Quote value consumed per unit of liquidity (scaled by 2^96) when quote
/// is token1: `(S - B) + floor(S * (A - S) / A)`
fn quote_per_liquidity_in_token1(sqrt_lower: &BigUint, sqrt_upper: &BigUint, sqrt_current: &BigUint) -> BigUint {
    let token1_part = sqrt_current - sqrt_lower;
    let token0_part = mul_div(sqrt_current, &(sqrt_upper - sqrt_current), sqrt_upper, Rounding::Down)
        .unwrap_or_default();
    token1_part + token0_part
}

/// Quote value consumed per unit of liquidity (scaled by 2^96) when quote
/// is token0: `floor(2^192 * (A - S) / (A * S)) + floor(2^192 * (S - B) / S^2)`
fn quote_per_liquidity_in_token0(sqrt_lower: &BigUint, sqrt_upper: &BigUint, sqrt_current: &BigUint) -> BigUint {
    let q192 = q192();
    let token0_part = mul_div(
        &q192,
        &(sqrt_upper - sqrt_current),
        &(sqrt_upper * sqrt_current),
        Rounding::Down,
    )
    .unwrap_or_default();
    let token1_part = mul_div(
        &q192,
        &(sqrt_current - sqrt_lower),
        &(sqrt_current * sqrt_current),
        Rounding::Down,
    )
    .unwrap_or_default();
    token0_part + token1_part
}

/// Maximum liquidity purchasable with a budget of `base_amount` base tokens
/// plus `quote_amount` quote tokens.
///
/// The base amount is valued at `sqrt_current` into one quote-denominated
/// budget. Below the range the budget is converted to token0 and sized with
/// [`liquidity_from_amount0`]; above it, to token1 with
/// [`liquidity_from_amount1`]; in range `liquidity = budget * 2^96 / K`
/// where `K` is the quote value one unit of liquidity consumes.
pub fn liquidity_from_investment_amounts(
    base_amount: &BigUint,
    quote_amount: &BigUint,
    is_quote_token0: bool,
    sqrt_lower: &BigUint,
    sqrt_upper: &BigUint,
    sqrt_current: &BigUint,
) -> BigUint {
    if sqrt_upper <= sqrt_lower || sqrt_current.is_zero() {
        log::trace!("degenerate range or zero price, returning zero liquidity");
        return BigUint::zero();
    }

    let q192 = q192();
    let price_x192 = sqrt_current * sqrt_current;

    // token1 per token0 = S^2 / 2^192; token0 per token1 = 2^192 / S^2
    let to_token1 = |amount0: &BigUint| mul_div(amount0, &price_x192, &q192, Rounding::Down).unwrap_or_default();
    let to_token0 = |amount1: &BigUint| mul_div(amount1, &q192, &price_x192, Rounding::Down).unwrap_or_default();

    let budget = if is_quote_token0 {
        quote_amount + to_token0(base_amount)
    } else {
        quote_amount + to_token1(base_amount)
    };
    if budget.is_zero() {
        return BigUint::zero();
    }

    if sqrt_current <= sqrt_lower {
        let budget0 = if is_quote_token0 { budget } else { to_token0(&budget) };
        return liquidity_from_amount0(sqrt_lower, sqrt_upper, &budget0);
    }

    if sqrt_current >= sqrt_upper {
        let budget1 = if is_quote_token0 { to_token1(&budget) } else { budget };
        return liquidity_from_amount1(sqrt_lower, sqrt_upper, &budget1);
    }

    let k = if is_quote_token0 {
        quote_per_liquidity_in_token0(sqrt_lower, sqrt_upper, sqrt_current)
    } else {
        quote_per_liquidity_in_token1(sqrt_lower, sqrt_upper, sqrt_current)
    };
    if k.is_zero() {
        return BigUint::zero();
    }

    mul_div(&budget, &q96(), &k, Rounding::Down).unwrap_or_default()
}

// ============================================================================
// Tick-based Compatibility Path
// ============================================================================

/// Tick-based wrappers over the sqrt price primitives.
///
/// Lower precision than passing sqrt prices directly: each tick is
/// converted on its own (rounded up to the tick boundary), so a current
/// price between ticks is represented by its tick's boundary price. Kept
/// for callers that depend on this looser rounding.
pub mod by_tick {
    use clmath_types::TokenAmounts;
    use num_bigint::BigUint;

    use crate::errors::CoreResult;
    use crate::math::tick_math::tick_to_sqrt_price;

    /// [`super::amounts_from_liquidity`] with ticks in place of sqrt prices
    pub fn amounts_from_liquidity(
        liquidity: &BigUint,
        tick_current: i32,
        tick_lower: i32,
        tick_upper: i32,
        round_up: bool,
    ) -> CoreResult<TokenAmounts> {
        Ok(super::amounts_from_liquidity(
            liquidity,
            &tick_to_sqrt_price(tick_current)?,
            &tick_to_sqrt_price(tick_lower)?,
            &tick_to_sqrt_price(tick_upper)?,
            round_up,
        ))
    }

    /// [`super::liquidity_from_amounts`] with ticks in place of sqrt prices
    pub fn liquidity_from_amounts(
        tick_current: i32,
        tick_lower: i32,
        tick_upper: i32,
        amount0: &BigUint,
        amount1: &BigUint,
    ) -> CoreResult<BigUint> {
        Ok(super::liquidity_from_amounts(
            &tick_to_sqrt_price(tick_current)?,
            &tick_to_sqrt_price(tick_lower)?,
            &tick_to_sqrt_price(tick_upper)?,
            amount0,
            amount1,
        ))
    }

    /// [`super::liquidity_from_investment_amounts`] with ticks in place of
    /// sqrt prices
    pub fn liquidity_from_investment_amounts(
        base_amount: &BigUint,
        quote_amount: &BigUint,
        is_quote_token0: bool,
        tick_lower: i32,
        tick_upper: i32,
        tick_current: i32,
    ) -> CoreResult<BigUint> {
        Ok(super::liquidity_from_investment_amounts(
            base_amount,
            quote_amount,
            is_quote_token0,
            &tick_to_sqrt_price(tick_lower)?,
            &tick_to_sqrt_price(tick_upper)?,
            &tick_to_sqrt_price(tick_current)?,
        ))
    }
}
