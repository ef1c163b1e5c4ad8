// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ERC-721 operation orchestrators
//!
//! This module provides the business operations of the SDK: write
//! operations ([`Erc721Ops`]) and contract deployment
//! ([`ContractDeployer`]) composed of codec + call builder + lifecycle
//! tracker, and read queries ([`Erc721Reader`]) decoded through the codec.

mod deploy;
mod ops;
mod reader;

pub use deploy::{ContractDeployer, DeployedContract, UDC_ADDRESS};
pub use ops::Erc721Ops;
pub use reader::Erc721Reader;

use starknet::core::types::Felt;

use crate::error::{Erc721Error, Result};

/// Entrypoint names of the target ERC-721 contract.
pub const ENTRYPOINT_MINT: &str = "mint";
pub const ENTRYPOINT_BURN: &str = "burn";
pub const ENTRYPOINT_SET_TOKEN_URI: &str = "setTokenURI";
pub const ENTRYPOINT_TRANSFER_FROM: &str = "transferFrom";
pub const ENTRYPOINT_NAME: &str = "name";
pub const ENTRYPOINT_SYMBOL: &str = "symbol";
pub const ENTRYPOINT_TOKEN_URI: &str = "tokenURI";

pub(crate) fn ensure_address(what: &str, address: Felt) -> Result<()> {
    if address == Felt::ZERO {
        return Err(Erc721Error::InvalidCall {
            reason: format!("{what} address must be non-zero"),
        });
    }
    Ok(())
}
