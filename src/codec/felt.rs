//! String ↔ field-element conversions.
//!
//! On-chain strings (token URIs, names, symbols) are stored as sequences of
//! field elements, each packing up to 31 big-endian bytes. The 31-byte cap
//! keeps every encoded value below 2^248, under the 251-bit field modulus,
//! so encoding never wraps.

use starknet::core::types::Felt;

use crate::error::{Erc721Error, Result};

/// Maximum number of bytes a single field element can carry.
pub const MAX_BYTES_PER_FELT: usize = 31;

/// Interprets `bytes` as a big-endian unsigned integer and returns the
/// corresponding field element.
///
/// # Errors
///
/// Returns [`Erc721Error::FeltOverflow`] if `bytes` is longer than
/// [`MAX_BYTES_PER_FELT`], since the result could then exceed the field
/// modulus.
pub fn bytes_to_felt(bytes: &[u8]) -> Result<Felt> {
    if bytes.len() > MAX_BYTES_PER_FELT {
        return Err(Erc721Error::FeltOverflow {
            reason: format!(
                "{} bytes exceed the {MAX_BYTES_PER_FELT}-byte field element capacity",
                bytes.len()
            ),
        });
    }
    Ok(Felt::from_bytes_be_slice(bytes))
}

/// Partitions `text`'s bytes into chunks of at most [`MAX_BYTES_PER_FELT`]
/// bytes (the last chunk may be shorter) and encodes each chunk with
/// [`bytes_to_felt`], preserving order.
///
/// An empty string yields an empty sequence. When used as calldata for a
/// string-valued contract parameter, the sequence is prefixed by its own
/// length as a leading felt; the orchestrators in [`crate::erc721`] apply
/// that convention.
///
/// Non-ASCII input is treated purely as raw bytes.
pub fn string_to_felts(text: &str) -> Result<Vec<Felt>> {
    text.as_bytes()
        .chunks(MAX_BYTES_PER_FELT)
        .map(bytes_to_felt)
        .collect()
}

/// Encodes a string that must fit in a single field element, such as the
/// name and symbol constructor arguments of an ERC-721 contract.
///
/// # Errors
///
/// Returns [`Erc721Error::FeltOverflow`] if `text` is longer than 31 bytes.
pub fn encode_short_string(text: &str) -> Result<Felt> {
    if text.len() > MAX_BYTES_PER_FELT {
        return Err(Erc721Error::FeltOverflow {
            reason: format!("short string {text:?} is longer than {MAX_BYTES_PER_FELT} bytes"),
        });
    }
    bytes_to_felt(text.as_bytes())
}

/// Renders a field element as its minimal big-endian byte sequence.
///
/// No leading zero byte is kept, except for the zero value which renders as
/// a single zero byte.
pub fn felt_to_bytes(felt: &Felt) -> Vec<u8> {
    let raw = felt.to_bytes_be();
    let start = raw.iter().position(|b| *b != 0).unwrap_or(raw.len() - 1);
    raw[start..].to_vec()
}

/// Renders a field element as minimal `0x`-prefixed lowercase hex, the
/// form used for transaction hashes and log output.
pub fn felt_to_hex(felt: &Felt) -> String {
    let digits: String = felt_to_bytes(felt)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect();
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{trimmed}")
    }
}

/// Decodes a sequence of field elements back into the string they encode,
/// concatenated in sequence order. Inverse of [`string_to_felts`] for
/// printable-ASCII input.
///
/// Each element is rendered as minimal big-endian bytes, formatted as hex
/// text, validated against the strict `0x([0-9a-fA-F]{2})+` pattern, and
/// mapped byte-by-byte to characters.
pub fn felts_to_string(felts: &[Felt]) -> Result<String> {
    let mut out = String::new();
    for felt in felts {
        out.push_str(&felt_to_ascii(felt)?);
    }
    Ok(out)
}

fn felt_to_ascii(felt: &Felt) -> Result<String> {
    let hex: String = felt_to_bytes(felt)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect();
    hex_to_ascii(&format!("0x{hex}"))
}

/// Decodes a strict `0x`-prefixed, even-length hex string into the string
/// whose characters carry the decoded byte values.
///
/// # Errors
///
/// Returns [`Erc721Error::MalformedHex`] if the prefix is missing, the
/// digit count is zero or odd, or any character is not a hex digit.
pub fn hex_to_ascii(hex: &str) -> Result<String> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| Erc721Error::MalformedHex {
            reason: format!("{hex:?} is missing the 0x prefix"),
        })?;
    if digits.is_empty() || digits.len() % 2 != 0 {
        return Err(Erc721Error::MalformedHex {
            reason: format!("{hex:?} must contain a positive, even number of hex digits"),
        });
    }

    let mut out = String::with_capacity(digits.len() / 2);
    for pair in digits.as_bytes().chunks(2) {
        let byte = (decode_digit(pair[0])? << 4) | decode_digit(pair[1])?;
        out.push(char::from(byte));
    }
    Ok(out)
}

fn decode_digit(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        other => Err(Erc721Error::MalformedHex {
            reason: format!("invalid hex digit {:?}", char::from(other)),
        }),
    }
}
