use thiserror::Error;

// ============================================================================
// Boundary Error Enum
// ============================================================================

/// Errors raised while building or orienting the boundary records.
///
/// Every variant is a caller contract violation: the records handed to the
/// engine are malformed or do not belong together.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Identifier is not a 0x-prefixed 40 digit hex string
    #[error("Invalid token identifier '{value}': {reason}")]
    InvalidTokenId { value: String, reason: &'static str },

    /// Both sides of a pair share one identifier
    #[error("Identical tokens: {token}")]
    IdenticalTokens { token: String },

    /// Base/quote do not match the pool's token0/token1
    #[error("Token mismatch: base {base} / quote {quote} not in pool ({token0}, {token1})")]
    TokenMismatch {
        base: String,
        quote: String,
        token0: String,
        token1: String,
    },

    /// Fee tier outside the supported enumeration
    #[error("Unsupported fee tier: {fee} (expected one of 100, 500, 3000, 10000)")]
    UnsupportedFeeTier { fee: u32 },

    /// Tick spacing that no fee tier uses
    #[error("Invalid tick spacing: {spacing}")]
    InvalidTickSpacing { spacing: i32 },
}

impl TypeError {
    /// Create an invalid token identifier error
    pub fn invalid_token_id(value: &str, reason: &'static str) -> Self {
        Self::InvalidTokenId {
            value: value.to_string(),
            reason,
        }
    }
}
