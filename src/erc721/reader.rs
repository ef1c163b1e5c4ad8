use alloy_primitives::U256;
use bon::Builder;
use starknet::core::types::Felt;

use crate::calls::ContractCall;
use crate::codec::{felt_to_hex, felts_to_string, split_token_id};
use crate::error::{Erc721Error, Result};
use crate::traits::CallClient;

use super::{ENTRYPOINT_NAME, ENTRYPOINT_SYMBOL, ENTRYPOINT_TOKEN_URI};

/// Read-only queries against a deployed ERC-721 contract.
///
/// Responses come back as raw felt sequences and are decoded through the
/// codec: name and symbol are single short-string felts, the token URI is
/// a length-prefixed chunk sequence.
#[derive(Builder, Clone, Debug)]
pub struct Erc721Reader<R> {
    contract_address: Felt,
    client: R,
}

impl<R> Erc721Reader<R>
where
    R: CallClient,
{
    /// The ERC-721 contract address all queries target.
    pub fn contract_address(&self) -> Felt {
        self.contract_address
    }

    /// Returns the contract name.
    pub async fn name(&self) -> Result<String> {
        self.short_string_query(ENTRYPOINT_NAME).await
    }

    /// Returns the contract symbol.
    pub async fn symbol(&self) -> Result<String> {
        self.short_string_query(ENTRYPOINT_SYMBOL).await
    }

    /// Returns the token URI of `token_id`, decoded from its on-chain
    /// chunk representation.
    pub async fn token_uri(&self, token_id: U256) -> Result<String> {
        let parts = split_token_id(token_id);
        let call = ContractCall::new(
            self.contract_address,
            ENTRYPOINT_TOKEN_URI,
            parts.to_calldata().to_vec(),
        );
        let response = self.client.call(&call).await?;
        decode_uri_response(&response)
    }

    async fn short_string_query(&self, entrypoint: &'static str) -> Result<String> {
        let call = ContractCall::new(self.contract_address, entrypoint, vec![]);
        let response = self.client.call(&call).await?;
        let felt = response.first().ok_or_else(|| Erc721Error::MalformedHex {
            reason: format!("{entrypoint} returned an empty response"),
        })?;
        felts_to_string(std::slice::from_ref(felt))
    }
}

/// Decodes a `[len, chunk...]` token URI response into the URI string.
fn decode_uri_response(response: &[Felt]) -> Result<String> {
    let (len, chunks) = response
        .split_first()
        .ok_or_else(|| Erc721Error::MalformedHex {
            reason: "token URI response is empty".to_string(),
        })?;
    if Felt::from(chunks.len() as u64) != *len {
        return Err(Erc721Error::MalformedHex {
            reason: format!(
                "token URI length prefix {} does not match {} chunks",
                felt_to_hex(len),
                chunks.len()
            ),
        });
    }
    felts_to_string(chunks)
}
