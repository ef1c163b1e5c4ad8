use alloy_primitives::U256;
use bon::Builder;
use starknet::core::types::Felt;
use tracing::debug;

use crate::calls::{CallBatch, ContractCall};
use crate::codec::{split_token_id, string_to_felts};
use crate::error::{Erc721Error, Result};
use crate::spans;
use crate::tracker::{TransactionHandle, TransactionTracker};
use crate::traits::{Clock, StatusSource, SubmissionClient};

use super::{
    ensure_address, ENTRYPOINT_BURN, ENTRYPOINT_MINT, ENTRYPOINT_SET_TOKEN_URI,
    ENTRYPOINT_TRANSFER_FROM,
};

/// Write operations against a single deployed ERC-721 contract.
///
/// Each operation validates its business parameters, encodes them through
/// the codec, assembles a call batch, and drives it through the lifecycle
/// tracker. No operation retries; the first failure is surfaced untouched,
/// and an on-chain rejection comes back as a terminal handle rather than
/// an error.
///
/// # Example
///
/// ```rust,no_run
/// # use starknet_erc721_rs::{Erc721Ops, TransactionTracker, Erc721Error};
/// # use starknet_erc721_rs::testing::{FakeClock, FakeStatusSource, FakeSubmitter};
/// # use starknet::{core::types::Felt, macros::felt};
/// # use alloy_primitives::U256;
/// # async fn example() -> Result<(), Erc721Error> {
/// # let tracker = TransactionTracker::builder()
/// #     .submitter(FakeSubmitter::new(Felt::ONE))
/// #     .status_source(FakeStatusSource::new())
/// #     .clock(FakeClock::new())
/// #     .build();
/// let nft = Erc721Ops::builder()
///     .contract_address(felt!("0x456"))
///     .tracker(tracker)
///     .build();
///
/// let handle = nft.mint(felt!("0x789"), U256::from(10u64), 3).await?;
/// println!("minted in {}", handle.hash_hex());
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
pub struct Erc721Ops<S, T, K> {
    contract_address: Felt,
    tracker: TransactionTracker<S, T, K>,
}

impl<S, T, K> Erc721Ops<S, T, K>
where
    S: SubmissionClient,
    T: StatusSource,
    K: Clock,
{
    /// The ERC-721 contract address all operations target.
    pub fn contract_address(&self) -> Felt {
        self.contract_address
    }

    /// Mints `amount` sequential token identifiers starting at `token_id`,
    /// all owned by `to`, as one atomic batch.
    ///
    /// The batch holds one `mint` call per identifier in ascending order;
    /// that on-chain execution order is fixed, so replays and tests see
    /// identical batches.
    pub async fn mint(&self, to: Felt, token_id: U256, amount: u64) -> Result<TransactionHandle> {
        let span = spans::erc721_operation("mint", &self.contract_address);
        let _guard = span.enter();

        ensure_address("mint recipient", to)?;
        ensure_amount("mint", amount)?;

        let mut calls = Vec::with_capacity(amount as usize);
        for index in 0..amount {
            let id = sequence_token_id(token_id, index)?;
            calls.push(mint_call(self.contract_address, to, id));
        }
        let batch = CallBatch::new(calls)?;

        debug!(amount = amount, event = "mint_batch_built");
        self.tracker.submit_and_await(&batch).await
    }

    /// Assigns `uri` to `amount` sequential token identifiers starting at
    /// `token_id`, as one atomic batch.
    pub async fn set_token_uri(
        &self,
        token_id: U256,
        amount: u64,
        uri: &str,
    ) -> Result<TransactionHandle> {
        let span = spans::erc721_operation("set_token_uri", &self.contract_address);
        let _guard = span.enter();

        ensure_amount("set_token_uri", amount)?;
        let chunks = string_to_felts(uri)?;

        let mut calls = Vec::with_capacity(amount as usize);
        for index in 0..amount {
            let id = sequence_token_id(token_id, index)?;
            calls.push(set_token_uri_call(self.contract_address, id, &chunks));
        }
        let batch = CallBatch::new(calls)?;

        debug!(
            amount = amount,
            uri_chunks = chunks.len(),
            event = "set_token_uri_batch_built"
        );
        self.tracker.submit_and_await(&batch).await
    }

    /// Mints one token and assigns its URI in a single atomic batch: both
    /// calls land in one transaction or neither does.
    pub async fn mint_with_uri(
        &self,
        to: Felt,
        token_id: U256,
        uri: &str,
    ) -> Result<TransactionHandle> {
        let span = spans::erc721_operation("mint_with_uri", &self.contract_address);
        let _guard = span.enter();

        ensure_address("mint recipient", to)?;
        let chunks = string_to_felts(uri)?;

        let batch = CallBatch::new(vec![
            mint_call(self.contract_address, to, token_id),
            set_token_uri_call(self.contract_address, token_id, &chunks),
        ])?;
        self.tracker.submit_and_await(&batch).await
    }

    /// Transfers `token_id` from `from` to `to`.
    pub async fn transfer(
        &self,
        from: Felt,
        to: Felt,
        token_id: U256,
    ) -> Result<TransactionHandle> {
        let span = spans::erc721_operation("transfer", &self.contract_address);
        let _guard = span.enter();

        ensure_address("transfer sender", from)?;
        ensure_address("transfer recipient", to)?;

        let parts = split_token_id(token_id);
        let call = ContractCall::new(
            self.contract_address,
            ENTRYPOINT_TRANSFER_FROM,
            vec![from, to, parts.low, parts.high],
        );
        self.tracker.submit_and_await(&CallBatch::single(call)).await
    }

    /// Burns `token_id`.
    pub async fn burn(&self, token_id: U256) -> Result<TransactionHandle> {
        let span = spans::erc721_operation("burn", &self.contract_address);
        let _guard = span.enter();

        let parts = split_token_id(token_id);
        let call = ContractCall::new(
            self.contract_address,
            ENTRYPOINT_BURN,
            parts.to_calldata().to_vec(),
        );
        self.tracker.submit_and_await(&CallBatch::single(call)).await
    }

    /// Executes an arbitrary prebuilt batch atomically through this
    /// contract's tracker. The batch's calls may target any contracts.
    pub async fn execute(&self, batch: &CallBatch) -> Result<TransactionHandle> {
        let span = spans::erc721_operation("multicall", &self.contract_address);
        let _guard = span.enter();

        self.tracker.submit_and_await(batch).await
    }
}

fn ensure_amount(operation: &str, amount: u64) -> Result<()> {
    if amount == 0 {
        return Err(Erc721Error::InvalidCall {
            reason: format!("{operation} amount must be at least 1"),
        });
    }
    Ok(())
}

fn sequence_token_id(start: U256, index: u64) -> Result<U256> {
    start
        .checked_add(U256::from(index))
        .ok_or_else(|| Erc721Error::TokenIdOutOfRange {
            reason: format!("token id sequence overflows 2^256 at index {index}"),
        })
}

fn mint_call(contract: Felt, to: Felt, token_id: U256) -> ContractCall {
    let parts = split_token_id(token_id);
    ContractCall::new(contract, ENTRYPOINT_MINT, vec![to, parts.low, parts.high])
}

fn set_token_uri_call(contract: Felt, token_id: U256, uri_chunks: &[Felt]) -> ContractCall {
    let parts = split_token_id(token_id);
    let mut calldata = Vec::with_capacity(3 + uri_chunks.len());
    calldata.push(parts.low);
    calldata.push(parts.high);
    // Explicit length prefix ahead of the chunk sequence, the convention
    // the on-chain URI storage expects.
    calldata.push(Felt::from(uri_chunks.len() as u64));
    calldata.extend_from_slice(uri_chunks);
    ContractCall::new(contract, ENTRYPOINT_SET_TOKEN_URI, calldata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::bytes_to_felt;
    use starknet::macros::felt;

    const CONTRACT: Felt = felt!("0x1111");
    const RECIPIENT: Felt = felt!("0x2222");

    #[test]
    fn test_mint_call_shape() {
        let call = mint_call(CONTRACT, RECIPIENT, U256::from(42u64));
        assert_eq!(call.to(), CONTRACT);
        assert_eq!(call.entrypoint(), ENTRYPOINT_MINT);
        assert_eq!(
            call.calldata(),
            &[RECIPIENT, Felt::from(42u64), Felt::ZERO]
        );
    }

    #[test]
    fn test_set_token_uri_call_shape() {
        // tokenId=1, 12-byte CID: calldata [low, high, length, chunk]
        let chunks = string_to_felts("QmExampleCID").unwrap();
        let call = set_token_uri_call(CONTRACT, U256::from(1u64), &chunks);
        assert_eq!(call.entrypoint(), ENTRYPOINT_SET_TOKEN_URI);
        assert_eq!(
            call.calldata(),
            &[
                Felt::ONE,
                Felt::ZERO,
                Felt::ONE,
                bytes_to_felt(b"QmExampleCID").unwrap(),
            ]
        );
    }

    #[test]
    fn test_set_token_uri_call_empty_uri_has_zero_length() {
        let call = set_token_uri_call(CONTRACT, U256::from(1u64), &[]);
        assert_eq!(call.calldata(), &[Felt::ONE, Felt::ZERO, Felt::ZERO]);
    }

    #[test]
    fn test_sequence_token_id_overflow() {
        assert_eq!(
            sequence_token_id(U256::from(10u64), 2).unwrap(),
            U256::from(12u64)
        );
        assert!(matches!(
            sequence_token_id(U256::MAX, 1).unwrap_err(),
            Erc721Error::TokenIdOutOfRange { .. }
        ));
    }

    #[test]
    fn test_ensure_amount() {
        assert!(ensure_amount("mint", 1).is_ok());
        assert!(matches!(
            ensure_amount("mint", 0).unwrap_err(),
            Erc721Error::InvalidCall { .. }
        ));
    }
}
