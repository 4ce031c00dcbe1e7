//! # PnL and PnL Curves
//!
//! Profit and loss against a cost basis, and the lazily evaluated PnL curve
//! of a position over a price range. Every curve sample is independent of
//! the others; the curve can be walked any number of times, indexed
//! directly, or evaluated in parallel.

use clmath_types::{Orientation, PnlPoint, TokenId};
use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

use crate::config::PriceRange;
use crate::constants::PNL_PERCENT_DIGITS;
use crate::errors::{CoreError, CoreResult};
use crate::math::price_math::price_to_closest_usable_tick;
use crate::math::tick_math::{is_tick_valid, max_usable_tick, tick_to_sqrt_price};
use crate::position::valuation::{determine_phase, position_value};

/// Signed profit and loss
#[derive(Debug, Clone, PartialEq)]
pub struct Pnl {
    pub pnl: BigInt,
    /// `100 * pnl / cost_basis`, zero when the cost basis is zero
    pub pnl_percent: f64,
}

/// `current_value - cost_basis` and its percentage of the cost basis
pub fn pnl(current_value: &BigUint, cost_basis: &BigUint) -> Pnl {
    let pnl = BigInt::from(current_value.clone()) - BigInt::from(cost_basis.clone());

    let pnl_percent = if cost_basis.is_zero() {
        0.0
    } else {
        let scale = BigInt::from(10u32).pow(PNL_PERCENT_DIGITS);
        let scaled = &pnl * 100u32 * &scale / BigInt::from(cost_basis.clone());
        scaled.to_f64().unwrap_or(0.0) / 10f64.powi(PNL_PERCENT_DIGITS as i32)
    };

    Pnl { pnl, pnl_percent }
}

/// Inputs for [`pnl_curve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PnlCurveParams {
    pub liquidity: BigUint,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Amount paid for the position, quote raw units
    pub cost_basis: BigUint,
    pub base: TokenId,
    pub quote: TokenId,
    pub base_decimals: u8,
    pub tick_spacing: i32,
    pub price_range: PriceRange,
    /// Number of intervals; the curve yields `num_points + 1` samples
    pub num_points: usize,
}

/// Build the PnL curve of a position.
///
/// Validates everything up front, so the only per-point failures left are
/// arithmetic ones that cannot occur for validated input.
pub fn pnl_curve(params: PnlCurveParams) -> CoreResult<PnlCurve> {
    if params.num_points == 0 {
        return Err(CoreError::invalid_parameter("num_points", "0", "greater than 0"));
    }
    params.price_range.validate()?;
    max_usable_tick(params.tick_spacing)?;

    for tick in [params.tick_lower, params.tick_upper] {
        if !is_tick_valid(tick) {
            return Err(CoreError::invalid_parameter(
                "tick",
                &tick.to_string(),
                "within [MIN_TICK, MAX_TICK]",
            ));
        }
    }

    let orientation = Orientation::from_ids(&params.base, &params.quote)?;

    log::debug!(
        "Built PnL curve: {} points over [{}, {}], ticks [{}, {})",
        params.num_points + 1,
        params.price_range.min,
        params.price_range.max,
        params.tick_lower,
        params.tick_upper
    );

    Ok(PnlCurve { params, orientation })
}

/// Lazily evaluated, restartable PnL curve
#[derive(Debug, Clone)]
pub struct PnlCurve {
    params: PnlCurveParams,
    orientation: Orientation,
}

impl PnlCurve {
    /// Number of samples, `num_points + 1`
    pub fn len(&self) -> usize {
        self.params.num_points + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn params(&self) -> &PnlCurveParams {
        &self.params
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Sample price `index`: `min + (max - min) * index / num_points`
    pub fn price_at(&self, index: usize) -> CoreResult<BigUint> {
        self.check_index(index)?;
        let range = &self.params.price_range;
        Ok(&range.min + range.width() * index / self.params.num_points)
    }

    /// Compute sample `index` independently of every other sample.
    ///
    /// The phase is classified on the snapped tick, so its direction along
    /// the curve follows the orientation.
    pub fn point(&self, index: usize) -> CoreResult<PnlPoint> {
        let price = self.price_at(index)?;
        let params = &self.params;

        let tick = price_to_closest_usable_tick(&price, params.tick_spacing, self.orientation, params.base_decimals)?;
        let sqrt_price = tick_to_sqrt_price(tick)?;

        let position_value = position_value(
            &params.liquidity,
            &sqrt_price,
            params.tick_lower,
            params.tick_upper,
            &price,
            self.orientation,
            params.base_decimals,
        )?;
        let Pnl { pnl, pnl_percent } = pnl(&position_value, &params.cost_basis);

        Ok(PnlPoint {
            price,
            position_value,
            pnl,
            pnl_percent,
            phase: determine_phase(tick, params.tick_lower, params.tick_upper),
        })
    }

    /// Walk the samples in price order; each call starts afresh
    pub fn iter(&self) -> PnlCurveIter<'_> {
        PnlCurveIter {
            curve: self,
            next: 0,
            end: self.len(),
        }
    }

    /// Evaluate every sample on the rayon thread pool, in price order
    #[cfg(feature = "parallel")]
    pub fn par_points(&self) -> CoreResult<Vec<PnlPoint>> {
        use rayon::prelude::*;

        (0..self.len()).into_par_iter().map(|index| self.point(index)).collect()
    }

    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index > self.params.num_points {
            return Err(CoreError::invalid_parameter(
                "index",
                &index.to_string(),
                &format!("at most {}", self.params.num_points),
            ));
        }
        Ok(())
    }
}

/// Iterator over the samples of a [`PnlCurve`]
#[derive(Debug, Clone)]
pub struct PnlCurveIter<'a> {
    curve: &'a PnlCurve,
    next: usize,
    end: usize,
}

impl Iterator for PnlCurveIter<'_> {
    type Item = CoreResult<PnlPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.curve.point(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for PnlCurveIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.curve.point(self.end))
    }
}

impl ExactSizeIterator for PnlCurveIter<'_> {}

impl<'a> IntoIterator for &'a PnlCurve {
    type Item = CoreResult<PnlPoint>;
    type IntoIter = PnlCurveIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
