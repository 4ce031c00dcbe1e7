//! # Tick Math
//!
//! Conversions between ticks and Q96 sqrt prices, bit-exact with the
//! on-chain TickMath library, plus tick-spacing snapping.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::{MAX_SQRT_RATIO_HI, MAX_SQRT_RATIO_LO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q128_RESOLUTION, SQRT_RATIO_MAGIC};
use crate::errors::{CoreError, CoreResult};
use crate::math::big_int::u256_max;

/// Low 32 bits dropped when narrowing Q128 to Q96
const Q128_TO_Q96_SHIFT: usize = 32;

/// sqrt price at MIN_TICK
pub fn min_sqrt_ratio() -> BigUint {
    BigUint::from(MIN_SQRT_RATIO)
}

/// sqrt price at MAX_TICK
pub fn max_sqrt_ratio() -> BigUint {
    (BigUint::from(MAX_SQRT_RATIO_HI) << 32u32) | BigUint::from(MAX_SQRT_RATIO_LO)
}

/// Check if a tick is within the supported range
pub fn is_tick_valid(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// sqrt(1.0001^tick) * 2^96, rounded up
pub fn tick_to_sqrt_price(tick: i32) -> CoreResult<BigUint> {
    if !is_tick_valid(tick) {
        return Err(CoreError::TickOutOfRange {
            tick,
            min: MIN_TICK,
            max: MAX_TICK,
        });
    }

    let abs_tick = tick.unsigned_abs();

    // Accumulate 1/sqrt(1.0001)^|tick| in Q128
    let mut ratio = if abs_tick & 1 != 0 {
        BigUint::from(SQRT_RATIO_MAGIC[0])
    } else {
        BigUint::one() << Q128_RESOLUTION
    };
    for (bit, magic) in SQRT_RATIO_MAGIC.iter().enumerate().skip(1) {
        if abs_tick & (1 << bit) != 0 {
            ratio = (ratio * *magic) >> Q128_RESOLUTION;
        }
    }

    if tick > 0 {
        ratio = u256_max() / ratio;
    }

    // Q128 -> Q96, rounding up so the result never undershoots the tick
    let remainder_mask = (BigUint::one() << Q128_TO_Q96_SHIFT) - 1u32;
    let round_up = !(&ratio & &remainder_mask).is_zero();
    let mut sqrt_price = ratio >> Q128_TO_Q96_SHIFT;
    if round_up {
        sqrt_price += 1u32;
    }

    Ok(sqrt_price)
}

/// Greatest tick whose sqrt price is <= `sqrt_price_x96`
pub fn sqrt_price_to_tick(sqrt_price_x96: &BigUint) -> CoreResult<i32> {
    if *sqrt_price_x96 < min_sqrt_ratio() || *sqrt_price_x96 >= max_sqrt_ratio() {
        return Err(CoreError::SqrtPriceOutOfRange {
            sqrt_price: sqrt_price_x96.to_string(),
        });
    }

    // tick_to_sqrt_price is strictly increasing, so the floor tick is a
    // plain binary search
    let mut low = MIN_TICK;
    let mut high = MAX_TICK;
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if tick_to_sqrt_price(mid)? <= *sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Clamp a tick to [MIN_TICK, MAX_TICK]
pub fn clamp_tick(tick: i64) -> i32 {
    tick.clamp(i64::from(MIN_TICK), i64::from(MAX_TICK)) as i32
}

/// Smallest multiple of `tick_spacing` that is a valid tick
pub fn min_usable_tick(tick_spacing: i32) -> CoreResult<i32> {
    validate_tick_spacing(tick_spacing)?;
    Ok(-(MAX_TICK / tick_spacing) * tick_spacing)
}

/// Largest multiple of `tick_spacing` that is a valid tick
pub fn max_usable_tick(tick_spacing: i32) -> CoreResult<i32> {
    validate_tick_spacing(tick_spacing)?;
    Ok((MAX_TICK / tick_spacing) * tick_spacing)
}

/// Nearest multiple of `tick_spacing` to `tick`.
///
/// The tick is first clamped into range. Halves round toward positive
/// infinity; a result past either bound is pulled back by one spacing.
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> CoreResult<i32> {
    validate_tick_spacing(tick_spacing)?;

    let tick = i64::from(clamp_tick(i64::from(tick)));
    let spacing = i64::from(tick_spacing);

    let mut rounded = (2 * tick + spacing).div_euclid(2 * spacing) * spacing;
    if rounded < i64::from(MIN_TICK) {
        rounded += spacing;
    } else if rounded > i64::from(MAX_TICK) {
        rounded -= spacing;
    }

    Ok(rounded as i32)
}

/// Round a tick down to a multiple of `tick_spacing`
pub fn floor_to_spacing(tick: i32, tick_spacing: i32) -> CoreResult<i32> {
    validate_tick_spacing(tick_spacing)?;
    Ok(tick.div_euclid(tick_spacing) * tick_spacing)
}

fn validate_tick_spacing(tick_spacing: i32) -> CoreResult<()> {
    if tick_spacing <= 0 || tick_spacing > MAX_TICK {
        return Err(CoreError::InvalidTickSpacing { spacing: tick_spacing });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::big_int::q96;

    fn dec(value: &str) -> BigUint {
        BigUint::parse_bytes(value.as_bytes(), 10).unwrap()
    }

    #[test]
    fn test_tick_to_sqrt_price_known_values() {
        assert_eq!(tick_to_sqrt_price(0).unwrap(), q96());
        assert_eq!(tick_to_sqrt_price(MIN_TICK).unwrap(), min_sqrt_ratio());
        assert_eq!(tick_to_sqrt_price(MAX_TICK).unwrap(), max_sqrt_ratio());
        assert_eq!(max_sqrt_ratio(), dec("1461446703485210103287273052203988822378723970342"));
        assert_eq!(max_sqrt_ratio().bits(), 160);

        assert_eq!(tick_to_sqrt_price(1).unwrap(), dec("79232123823359799118286999568"));
        assert_eq!(tick_to_sqrt_price(-1).unwrap(), dec("79224201403219477170569942574"));
        assert_eq!(tick_to_sqrt_price(60).unwrap(), dec("79466191966197645195421774833"));
        assert_eq!(tick_to_sqrt_price(100).unwrap(), dec("79625275426524748796330556128"));
        assert_eq!(tick_to_sqrt_price(-100).unwrap(), dec("78833030112140176575862854579"));
    }

    #[test]
    fn test_tick_out_of_range() {
        assert!(matches!(
            tick_to_sqrt_price(MIN_TICK - 1),
            Err(CoreError::TickOutOfRange { .. })
        ));
        assert!(tick_to_sqrt_price(MAX_TICK + 1).is_err());
    }

    #[test]
    fn test_sqrt_price_to_tick_round_trip() {
        for tick in [MIN_TICK, -200_000, -1000, -1, 0, 1, 60, 1000, 200_000, MAX_TICK - 1] {
            let sqrt_price = tick_to_sqrt_price(tick).unwrap();
            assert_eq!(sqrt_price_to_tick(&sqrt_price).unwrap(), tick);

            // One below the boundary belongs to the previous tick
            if tick > MIN_TICK {
                assert_eq!(sqrt_price_to_tick(&(sqrt_price - 1u32)).unwrap(), tick - 1);
            }
        }
    }

    #[test]
    fn test_sqrt_price_to_tick_bounds() {
        assert!(sqrt_price_to_tick(&(min_sqrt_ratio() - 1u32)).is_err());
        assert!(sqrt_price_to_tick(&max_sqrt_ratio()).is_err());
        assert_eq!(sqrt_price_to_tick(&(max_sqrt_ratio() - 1u32)).unwrap(), MAX_TICK - 1);
    }

    #[test]
    fn test_nearest_usable_tick() {
        assert_eq!(nearest_usable_tick(5, 10).unwrap(), 10);
        assert_eq!(nearest_usable_tick(4, 10).unwrap(), 0);
        assert_eq!(nearest_usable_tick(-5, 10).unwrap(), 0);
        assert_eq!(nearest_usable_tick(-6, 10).unwrap(), -10);
        assert_eq!(nearest_usable_tick(29, 60).unwrap(), 0);
        assert_eq!(nearest_usable_tick(30, 60).unwrap(), 60);

        // Out-of-range ticks clamp first and stay usable
        assert_eq!(nearest_usable_tick(MAX_TICK + 500, 60).unwrap(), max_usable_tick(60).unwrap());
        assert_eq!(nearest_usable_tick(MIN_TICK - 500, 200).unwrap(), min_usable_tick(200).unwrap());
        assert_eq!(nearest_usable_tick(MAX_TICK, 1).unwrap(), MAX_TICK);

        assert!(nearest_usable_tick(0, 0).is_err());
        assert!(nearest_usable_tick(0, -10).is_err());
    }

    #[test]
    fn test_floor_to_spacing() {
        assert_eq!(floor_to_spacing(59, 60).unwrap(), 0);
        assert_eq!(floor_to_spacing(-1, 60).unwrap(), -60);
        assert_eq!(floor_to_spacing(120, 60).unwrap(), 120);
    }
}
