//! Contract call records and atomic call batches.
//!
//! A [`ContractCall`] is the pure `{contract, entrypoint, calldata}` record
//! describing one invocation; a [`CallBatch`] is an ordered, non-empty
//! sequence of them, executed atomically as a single transaction by the
//! account that signs it. Nothing here touches the network.

use starknet::core::types::Felt;

use crate::error::{Erc721Error, Result};

/// A single contract invocation record.
///
/// Immutable once constructed: fields are only reachable through accessors.
/// The entrypoint is kept as its human-readable name; conversion to a
/// selector happens at the provider boundary, where the signing client
/// serializes the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    to: Felt,
    entrypoint: String,
    calldata: Vec<Felt>,
}

impl ContractCall {
    /// Assembles a call record. `calldata` must already be in the exact
    /// order the target entrypoint expects; the caller is responsible for
    /// running values through the codec first.
    pub fn new(to: Felt, entrypoint: impl Into<String>, calldata: Vec<Felt>) -> Self {
        Self {
            to,
            entrypoint: entrypoint.into(),
            calldata,
        }
    }

    /// The target contract address.
    pub fn to(&self) -> Felt {
        self.to
    }

    /// The entrypoint name, as supplied by the caller.
    pub fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    /// The ordered calldata felts.
    pub fn calldata(&self) -> &[Felt] {
        &self.calldata
    }
}

/// An ordered, non-empty sequence of calls executed atomically: all calls
/// succeed or the whole transaction is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallBatch {
    calls: Vec<ContractCall>,
}

impl CallBatch {
    /// Builds a batch from an ordered call sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Erc721Error::InvalidCall`] if `calls` is empty.
    pub fn new(calls: Vec<ContractCall>) -> Result<Self> {
        if calls.is_empty() {
            return Err(Erc721Error::InvalidCall {
                reason: "call batch must contain at least one call".to_string(),
            });
        }
        Ok(Self { calls })
    }

    /// Builds a batch around a single call.
    pub fn single(call: ContractCall) -> Self {
        Self { calls: vec![call] }
    }

    /// The calls in execution order.
    pub fn calls(&self) -> &[ContractCall] {
        &self.calls
    }

    /// Number of calls in the batch, always at least one.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
