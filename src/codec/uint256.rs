//! 256-bit token identifier handling.
//!
//! ERC-721 token identifiers are 256-bit unsigned integers, wider than a
//! single 251-bit field element can carry with fixed bit-level guarantees.
//! They cross the call boundary as a low/high pair of 128-bit halves.

use std::str::FromStr;

use alloy_primitives::U256;
use starknet::core::types::Felt;

use crate::error::{Erc721Error, Result};

/// The low/high halves of a 256-bit token identifier.
///
/// Invariant: `value == low + high * 2^128`, with each half below 2^128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uint256Parts {
    pub low: Felt,
    pub high: Felt,
}

impl Uint256Parts {
    /// Returns the pair in the `[low, high]` order contract entrypoints
    /// expect.
    pub fn to_calldata(self) -> [Felt; 2] {
        [self.low, self.high]
    }
}

/// Splits a 256-bit token identifier into its 128-bit halves.
///
/// `low = value mod 2^128`, `high = value div 2^128`. Infallible: every
/// `U256` is in range by construction, and both halves fit a field element.
pub fn split_token_id(value: U256) -> Uint256Parts {
    let limbs = value.as_limbs();
    let low = (limbs[1] as u128) << 64 | limbs[0] as u128;
    let high = (limbs[3] as u128) << 64 | limbs[2] as u128;
    Uint256Parts {
        low: Felt::from(low),
        high: Felt::from(high),
    }
}

/// Parses a token identifier from decimal or `0x`-prefixed hex text.
///
/// # Errors
///
/// Returns [`Erc721Error::TokenIdOutOfRange`] for anything outside
/// `[0, 2^256)` — negative values, values of 2^256 or more, or text that is
/// not a number at all.
pub fn parse_token_id(text: &str) -> Result<U256> {
    U256::from_str(text).map_err(|e| Erc721Error::TokenIdOutOfRange {
        reason: format!("{text:?}: {e}"),
    })
}
