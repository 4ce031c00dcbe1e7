//! # Engine Constants
//!
//! Fixed-point resolutions, tick bounds and the precomputed
//! sqrt(1.0001)^-(2^i) table used by the tick conversion.

// ============================================================================
// Fixed-point Resolutions
// ============================================================================

/// Bits of fractional precision in an X96 value
pub const Q96_RESOLUTION: usize = 96;

/// Bits of fractional precision in an X128 value
pub const Q128_RESOLUTION: usize = 128;

/// Squared X96 scale, used when squaring sqrt prices
pub const Q192_RESOLUTION: usize = 192;

/// Width of the on-chain accumulators
pub const U256_BITS: usize = 256;

// ============================================================================
// Tick Bounds
// ============================================================================

/// Minimum tick, log base sqrt(1.0001) of 2^-128
pub const MIN_TICK: i32 = -887_272;

/// Maximum tick
pub const MAX_TICK: i32 = 887_272;

/// sqrt price at MIN_TICK, Q96
pub const MIN_SQRT_RATIO: u128 = 4_295_128_739;

/// Upper 128 bits of the sqrt price at MAX_TICK, Q96 (160 bits in total)
pub const MAX_SQRT_RATIO_HI: u128 = 0xfffd_8963_efd1_fc6a_5064_8849_5d95_1d52;

/// Lower 32 bits of the sqrt price at MAX_TICK
pub const MAX_SQRT_RATIO_LO: u32 = 0x6398_8d26;

// ============================================================================
// Tick Math Table
// ============================================================================

/// Q128 value of 1 / sqrt(1.0001)^(2^i) for i = 0..20.
///
/// Entry 0 applies when bit 0 of |tick| is set; otherwise the
/// accumulator starts at exactly 2^128.
pub const SQRT_RATIO_MAGIC: [u128; 20] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

// ============================================================================
// Curve Defaults
// ============================================================================

/// Default number of PnL curve intervals (points = intervals + 1)
pub const DEFAULT_CURVE_POINTS: usize = 150;

/// Default half-width of a curve's price range around the current price
pub const DEFAULT_RANGE_WIDTH_BPS: u32 = 5_000;

/// Basis points denominator (10,000 = 100%)
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Fractional digits kept when converting a PnL ratio to a percentage
pub const PNL_PERCENT_DIGITS: u32 = 6;
