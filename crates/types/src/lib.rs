//! Shared records for the concentrated-liquidity math engine
//!
//! This crate defines the plain data the engine reads and returns: token
//! identifiers and pair orientation, fee tiers, protocol-tagged pool
//! snapshots, tick and position snapshots, and derived PnL samples.

pub mod errors;
pub mod pool;
pub mod position;
pub mod token;

// Re-export all public types
pub use errors::*;
pub use pool::*;
pub use position::*;
pub use token::*;

/// Result type alias using the boundary error type
pub type TypeResult<T> = std::result::Result<T, TypeError>;
