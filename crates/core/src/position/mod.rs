//! # Position Valuation
//!
//! Phase classification, quote-denominated value, PnL and PnL curves.

pub mod pnl;
pub mod valuation;

pub use pnl::{pnl, pnl_curve, Pnl, PnlCurve, PnlCurveIter, PnlCurveParams};
pub use valuation::{determine_phase, position_value};
