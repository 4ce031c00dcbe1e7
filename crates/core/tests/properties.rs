//! Property-based tests for the tick, liquidity and fee components.
//! Verifies monotonicity, regime boundaries, rounding bounds and the
//! floor-at-zero accumulator difference.

use clmath_core::*;
use num_bigint::BigUint;
use num_traits::Zero;
use proptest::prelude::*;

// ============================================================================
// Test Strategies
// ============================================================================

/// Ticks well inside the valid range
fn ticks() -> impl Strategy<Value = i32> {
    -400_000i32..400_000
}

/// Ordered (lower, current, upper) ticks with a non-empty range
fn range_with_current() -> impl Strategy<Value = (i32, i32, i32)> {
    (ticks(), 1i32..20_000, -25_000i32..25_000).prop_map(|(lower, width, offset)| {
        let upper = (lower + width).min(MAX_TICK);
        let current = (lower + offset).clamp(MIN_TICK, MAX_TICK);
        (lower, current, upper)
    })
}

/// Liquidity values from dust to whale sized
fn liquidity_values() -> impl Strategy<Value = BigUint> {
    prop_oneof![
        (1u64..1_000_000).prop_map(BigUint::from),
        (1u128..u128::MAX).prop_map(BigUint::from),
    ]
}

fn sqrt(tick: i32) -> BigUint {
    tick_to_sqrt_price(tick).unwrap()
}

// ============================================================================
// Tick Properties
// ============================================================================

proptest! {
    /// sqrt price strictly increases with the tick
    #[test]
    fn prop_tick_to_sqrt_price_monotone(tick in (MIN_TICK..MAX_TICK)) {
        prop_assert!(sqrt(tick) < sqrt(tick + 1));
    }

    /// sqrt_price_to_tick inverts tick_to_sqrt_price
    #[test]
    fn prop_sqrt_price_to_tick_inverse(tick in (MIN_TICK..MAX_TICK)) {
        prop_assert_eq!(sqrt_price_to_tick(&sqrt(tick)).unwrap(), tick);
    }

    /// Snapped ticks are usable multiples inside the valid range
    #[test]
    fn prop_nearest_usable_tick(tick in (MIN_TICK - 1000..MAX_TICK + 1000), spacing_index in 0usize..4) {
        let spacing = FeeTier::ALL[spacing_index].tick_spacing();
        let snapped = nearest_usable_tick(tick, spacing).unwrap();
        prop_assert_eq!(snapped % spacing, 0);
        prop_assert!(is_tick_valid(snapped));
    }
}

// ============================================================================
// Liquidity Properties
// ============================================================================

proptest! {
    /// Zero liquidity holds nothing, wherever the price is
    #[test]
    fn prop_zero_liquidity_zero_amounts((lower, current, upper) in range_with_current(), round_up in any::<bool>()) {
        let amounts = amounts_from_liquidity(&BigUint::zero(), &sqrt(current), &sqrt(lower), &sqrt(upper), round_up);
        prop_assert!(amounts.is_zero());
    }

    /// Out of range the position is single-sided
    #[test]
    fn prop_regime_single_sided((lower, current, upper) in range_with_current(), liquidity in liquidity_values()) {
        let amounts = amounts_from_liquidity(&liquidity, &sqrt(current), &sqrt(lower), &sqrt(upper), false);
        if current <= lower {
            prop_assert!(amounts.amount1.is_zero());
        }
        if current >= upper {
            prop_assert!(amounts.amount0.is_zero());
        }
    }

    /// Ceiling rounding adds at most one unit per token
    #[test]
    fn prop_ceiling_within_one((lower, current, upper) in range_with_current(), liquidity in liquidity_values()) {
        let (current, lower, upper) = (sqrt(current), sqrt(lower), sqrt(upper));
        let floor = amounts_from_liquidity(&liquidity, &current, &lower, &upper, false);
        let ceil = amounts_from_liquidity(&liquidity, &current, &lower, &upper, true);

        prop_assert!(ceil.amount0 >= floor.amount0);
        prop_assert!(ceil.amount1 >= floor.amount1);
        prop_assert!(&ceil.amount0 - &floor.amount0 <= BigUint::from(1u32));
        prop_assert!(&ceil.amount1 - &floor.amount1 <= BigUint::from(1u32));
    }

    /// Converting amounts back never yields more liquidity than went in
    #[test]
    fn prop_liquidity_round_trip((lower, current, upper) in range_with_current(), liquidity in liquidity_values()) {
        let (current, lower, upper) = (sqrt(current), sqrt(lower), sqrt(upper));
        let amounts = amounts_from_liquidity(&liquidity, &current, &lower, &upper, false);
        let recovered = liquidity_from_amounts(&current, &lower, &upper, &amounts.amount0, &amounts.amount1);
        prop_assert!(recovered <= liquidity);
    }

    /// Inverted bounds are degenerate, not an error
    #[test]
    fn prop_inverted_bounds_zero((lower, current, upper) in range_with_current(), liquidity in liquidity_values()) {
        let amounts = amounts_from_liquidity(&liquidity, &sqrt(current), &sqrt(upper), &sqrt(lower), true);
        prop_assert!(amounts.is_zero());
        let budget = liquidity_from_investment_amounts(&liquidity, &liquidity, true, &sqrt(upper), &sqrt(lower), &sqrt(current));
        prop_assert!(budget.is_zero());
    }
}

// ============================================================================
// Fee Properties
// ============================================================================

proptest! {
    /// safe_difference floors at zero and is exact otherwise
    #[test]
    fn prop_safe_difference(a in any::<u128>(), b in any::<u128>()) {
        let result = safe_difference(&BigUint::from(a), &BigUint::from(b));
        if b >= a {
            prop_assert!(result.is_zero());
        } else {
            prop_assert_eq!(result, BigUint::from(a - b));
        }
    }

    /// Growth inside never exceeds global growth
    #[test]
    fn prop_fee_growth_inside_bounded(
        (lower, current, upper) in range_with_current(),
        global in any::<u128>(),
        outside in (any::<u128>(), any::<u128>()),
    ) {
        let global = BigUint::from(global);
        let lower_snapshot = TickSnapshot::new(BigUint::from(outside.0), BigUint::zero());
        let upper_snapshot = TickSnapshot::new(BigUint::from(outside.1), BigUint::zero());

        let (inside_0, inside_1) = fee_growth_inside(
            current, lower, upper, &global, &BigUint::zero(), &lower_snapshot, &upper_snapshot,
        );
        prop_assert!(inside_0 <= global);
        prop_assert!(inside_1.is_zero());
    }
}
