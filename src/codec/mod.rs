// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Value codecs between domain types and field elements
//!
//! This module contains the pure conversion layer of the SDK: packing
//! strings into 31-byte field-element chunks (and back), and splitting
//! 256-bit token identifiers into the low/high halves Starknet contracts
//! expect. Everything here is synchronous and side-effect free.

mod felt;
mod uint256;

pub use felt::{
    bytes_to_felt, encode_short_string, felt_to_bytes, felt_to_hex, felts_to_string,
    hex_to_ascii, string_to_felts, MAX_BYTES_PER_FELT,
};
pub use uint256::{parse_token_id, split_token_id, Uint256Parts};
