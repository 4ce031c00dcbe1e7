//! # Tokens
//!
//! 160-bit token identifiers, pool token pairs and the base/quote
//! orientation every price conversion branches on.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{hex, Address};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::TypeError;

/// Number of bytes in a token identifier
pub const TOKEN_ID_BYTES: usize = 20;

// ============================================================================
// Token Identifier
// ============================================================================

/// 160-bit token identifier, wrapping the EVM address type.
///
/// Bytes are big-endian, so the derived `Ord` is the numeric order of the
/// identifier: the smaller identifier of a pool is token0. Checksum casing
/// is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenId(pub Address);

impl TokenId {
    pub const fn new(bytes: [u8; TOKEN_ID_BYTES]) -> Self {
        Self(Address::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; TOKEN_ID_BYTES] {
        &self.0 .0 .0
    }

    pub const fn address(&self) -> Address {
        self.0
    }

    /// True when `self` is token0 in a pool with `other`
    pub fn sorts_before(&self, other: &TokenId) -> bool {
        self < other
    }
}

impl From<Address> for TokenId {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<TokenId> for Address {
    fn from(id: TokenId) -> Self {
        id.0
    }
}

impl FromStr for TokenId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Address parsing treats the prefix as optional; identifiers require it
        if !(s.starts_with("0x") || s.starts_with("0X")) {
            return Err(TypeError::invalid_token_id(s, "missing 0x prefix"));
        }

        Address::from_str(s)
            .map(Self)
            .map_err(|_| TypeError::invalid_token_id(s, "expected 40 hex digits"))
    }
}

/// Lowercase `0x`-prefixed hex; `Address` itself displays the checksummed form
impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(self.0))
    }
}

// ============================================================================
// Token and Pair
// ============================================================================

/// A pool token: identifier plus the decimals used to denominate raw amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub id: TokenId,
    pub decimals: u8,
}

impl Token {
    pub const fn new(id: TokenId, decimals: u8) -> Self {
        Self { id, decimals }
    }
}

/// Which of the pool tokens is the priced (base) asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    pub base_is_token0: bool,
}

impl Orientation {
    /// Base is token0, quote is token1
    pub const BASE_TOKEN0: Orientation = Orientation { base_is_token0: true };

    /// Base is token1, quote is token0
    pub const BASE_TOKEN1: Orientation = Orientation { base_is_token0: false };

    pub const fn new(base_is_token0: bool) -> Self {
        Self { base_is_token0 }
    }

    /// Orientation of a base/quote pair, from the identifier order alone
    pub fn from_ids(base: &TokenId, quote: &TokenId) -> Result<Self, TypeError> {
        if base == quote {
            return Err(TypeError::IdenticalTokens {
                token: base.to_string(),
            });
        }
        Ok(Self::new(base.sorts_before(quote)))
    }

    /// True when the quote (unit of account) token is token0
    pub const fn is_quote_token0(&self) -> bool {
        !self.base_is_token0
    }
}

/// The two tokens of a pool in canonical order (token0 < token1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenPair {
    pub token0: Token,
    pub token1: Token,
}

impl TokenPair {
    /// Build a pair from two tokens in any order
    pub fn new(a: Token, b: Token) -> Result<Self, TypeError> {
        if a.id == b.id {
            return Err(TypeError::IdenticalTokens {
                token: a.id.to_string(),
            });
        }

        let (token0, token1) = if a.id.sorts_before(&b.id) { (a, b) } else { (b, a) };
        Ok(Self { token0, token1 })
    }

    /// Orient a base/quote quotation against this pool.
    ///
    /// Fails unless `{base, quote}` is exactly `{token0, token1}`.
    pub fn orient(&self, base: &TokenId, quote: &TokenId) -> Result<Orientation, TypeError> {
        if *base == self.token0.id && *quote == self.token1.id {
            Ok(Orientation::BASE_TOKEN0)
        } else if *base == self.token1.id && *quote == self.token0.id {
            Ok(Orientation::BASE_TOKEN1)
        } else {
            Err(TypeError::TokenMismatch {
                base: base.to_string(),
                quote: quote.to_string(),
                token0: self.token0.id.to_string(),
                token1: self.token1.id.to_string(),
            })
        }
    }

    /// Base token for an orientation
    pub fn base(&self, orientation: Orientation) -> &Token {
        if orientation.base_is_token0 {
            &self.token0
        } else {
            &self.token1
        }
    }

    /// Quote token for an orientation
    pub fn quote(&self, orientation: Orientation) -> &Token {
        if orientation.base_is_token0 {
            &self.token1
        } else {
            &self.token0
        }
    }
}
