//! # PnL Curve Tests
//!
//! End-to-end curve generation for a WETH/USDC-style position, in both
//! base/quote orientations.

use clmath_core::*;
use num_bigint::{BigInt, BigUint};

const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn phase_rank(phase: Phase) -> u8 {
    match phase {
        Phase::Below => 0,
        Phase::InRange => 1,
        Phase::Above => 2,
    }
}

/// Position over [1500, 2500] USDC per WETH, bought at 2000
fn weth_usdc_params(num_points: usize) -> PnlCurveParams {
    let weth: TokenId = WETH.parse().unwrap();
    let usdc: TokenId = USDC.parse().unwrap();
    let orientation = Orientation::from_ids(&weth, &usdc).unwrap();

    let tick_a = price_to_tick(&parse_price("1500", 6).unwrap(), 60, orientation, 18).unwrap();
    let tick_b = price_to_tick(&parse_price("2500", 6).unwrap(), 60, orientation, 18).unwrap();
    let (tick_lower, tick_upper) = (tick_a.min(tick_b), tick_a.max(tick_b));

    let entry_price = parse_price("2000", 6).unwrap();
    let entry_tick = price_to_closest_usable_tick(&entry_price, 60, orientation, 18).unwrap();
    let liquidity = BigUint::from(10u64.pow(15));
    let cost_basis = position_value(
        &liquidity,
        &tick_to_sqrt_price(entry_tick).unwrap(),
        tick_lower,
        tick_upper,
        &entry_price,
        orientation,
        18,
    )
    .unwrap();

    PnlCurveParams {
        liquidity,
        tick_lower,
        tick_upper,
        cost_basis,
        base: weth,
        quote: usdc,
        base_decimals: 18,
        tick_spacing: FeeTier::Medium.tick_spacing(),
        price_range: PriceRange::new(parse_price("1000", 6).unwrap(), parse_price("3000", 6).unwrap()).unwrap(),
        num_points,
    }
}

#[test]
fn test_curve_has_num_points_plus_one_samples() {
    init_logging();

    let curve = pnl_curve(weth_usdc_params(150)).unwrap();
    let points: Vec<PnlPoint> = curve.iter().collect::<CoreResult<_>>().unwrap();
    assert_eq!(points.len(), 151);

    for pair in points.windows(2) {
        assert!(pair[0].price < pair[1].price);
    }
    assert_eq!(points[0].price, BigUint::from(1_000_000_000u64));
    assert_eq!(points[150].price, BigUint::from(3_000_000_000u64));
}

#[test]
fn test_phase_transitions_follow_orientation() {
    init_logging();

    // WETH is token1 here, so rising USDC prices walk ticks downward
    let curve = pnl_curve(weth_usdc_params(150)).unwrap();
    assert!(!curve.orientation().base_is_token0);

    let phases: Vec<Phase> = curve.iter().map(|point| point.unwrap().phase).collect();
    assert_eq!(phases.first(), Some(&Phase::Above));
    assert_eq!(phases.last(), Some(&Phase::Below));
    assert!(phases.windows(2).all(|pair| phase_rank(pair[0]) >= phase_rank(pair[1])));
    assert!(phases.contains(&Phase::InRange));

    // Same position quoted the other way round: base token0
    let mut params = weth_usdc_params(150);
    std::mem::swap(&mut params.base, &mut params.quote);
    params.base_decimals = 6;
    params.price_range = PriceRange::new(BigUint::from(10u64.pow(14)), BigUint::from(10u64.pow(15))).unwrap();
    let curve = pnl_curve(params).unwrap();
    assert!(curve.orientation().base_is_token0);

    let phases: Vec<Phase> = curve.iter().map(|point| point.unwrap().phase).collect();
    assert_eq!(phases.len(), 151);
    assert!(phases.windows(2).all(|pair| phase_rank(pair[0]) <= phase_rank(pair[1])));
}

#[test]
fn test_entry_price_has_zero_pnl() {
    let curve = pnl_curve(weth_usdc_params(150)).unwrap();

    // Sample 75 is exactly the 2000 USDC entry price
    let entry = curve.point(75).unwrap();
    assert_eq!(entry.price, BigUint::from(2_000_000_000u64));
    assert_eq!(entry.phase, Phase::InRange);
    assert_eq!(entry.pnl, BigInt::from(0));
    assert_eq!(entry.pnl_percent, 0.0);

    // Concentrated liquidity loses value on both sides of the entry
    let low = curve.point(0).unwrap();
    assert!(low.pnl < BigInt::from(0));
    assert!(low.pnl_percent < 0.0);
}

#[test]
fn test_curve_built_from_config() {
    let config = CurveConfig::default();
    let range = config.price_range_around(&BigUint::from(2_000_000_000u64)).unwrap();

    let mut params = weth_usdc_params(config.num_points);
    params.price_range = range;
    let curve = pnl_curve(params).unwrap();

    assert_eq!(curve.len(), config.num_points + 1);
    assert_eq!(curve.price_at(0).unwrap(), BigUint::from(1_000_000_000u64));
    assert_eq!(curve.price_at(config.num_points).unwrap(), BigUint::from(3_000_000_000u64));
}
