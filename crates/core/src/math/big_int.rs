//! Big integer helpers for fixed-point math
//!
//! All engine quantities are `BigUint`, so intermediate products such as
//! `liquidity * (sqrt_b - sqrt_a) * 2^96` never wrap. This module supplies
//! the rounding-aware division and the fixed-point scale constants.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::{Q128_RESOLUTION, Q192_RESOLUTION, Q96_RESOLUTION, U256_BITS};

/// Rounding mode for division operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round down (floor)
    Down,
    /// Round up (ceiling)
    Up,
}

impl Rounding {
    pub fn from_round_up(round_up: bool) -> Self {
        if round_up {
            Rounding::Up
        } else {
            Rounding::Down
        }
    }
}

/// 2^96
pub fn q96() -> BigUint {
    BigUint::one() << Q96_RESOLUTION
}

/// 2^128
pub fn q128() -> BigUint {
    BigUint::one() << Q128_RESOLUTION
}

/// 2^192
pub fn q192() -> BigUint {
    BigUint::one() << Q192_RESOLUTION
}

/// 2^256 - 1
pub fn u256_max() -> BigUint {
    (BigUint::one() << U256_BITS) - 1u32
}

/// 10^exp
pub fn pow10(exp: u8) -> BigUint {
    BigUint::from(10u32).pow(u32::from(exp))
}

/// numerator / denominator with the given rounding.
///
/// Returns `None` for a zero denominator.
pub fn div_rounding(numerator: &BigUint, denominator: &BigUint, rounding: Rounding) -> Option<BigUint> {
    if denominator.is_zero() {
        return None;
    }

    let quotient = numerator / denominator;
    if rounding == Rounding::Up && !(numerator % denominator).is_zero() {
        return Some(quotient + 1u32);
    }

    Some(quotient)
}

/// (a * b) / denominator with the given rounding.
///
/// Returns `None` for a zero denominator.
pub fn mul_div(a: &BigUint, b: &BigUint, denominator: &BigUint, rounding: Rounding) -> Option<BigUint> {
    div_rounding(&(a * b), denominator, rounding)
}

/// a - b, or zero when b >= a
pub fn saturating_sub(a: &BigUint, b: &BigUint) -> BigUint {
    if a > b {
        a - b
    } else {
        BigUint::zero()
    }
}
