//! Transaction lifecycle tracking: submit once, await a terminal state.
//!
//! Every write operation in this SDK funnels through
//! [`TransactionTracker::submit_and_await`]: the batch is handed to the
//! signing collaborator exactly once, then the status source is polled
//! until the network reports a terminal state. Rejection is a reported
//! outcome carried in the returned handle, not an error of this layer.

use bon::Builder;
use serde::{Deserialize, Serialize};
use starknet::core::types::Felt;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::calls::CallBatch;
use crate::config::ConfirmationConfig;
use crate::error::{Erc721Error, Result};
use crate::spans;
use crate::traits::{Clock, StatusSource, SubmissionClient};

/// Confirmation state of a transaction as reported by a status source.
///
/// A hash the network does not know about yet reports `Pending`; the
/// tracker keeps polling until it observes a terminal `Accepted` or
/// `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// Lifecycle state of a tracked transaction.
///
/// Transitions only `Submitted -> Accepted` or `Submitted -> Rejected`,
/// driven exclusively by the tracker. Terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    Submitted,
    Accepted,
    Rejected,
}

/// Handle to a submitted transaction.
///
/// Created when submission returns a hash; the handles returned by
/// [`TransactionTracker::submit_and_await`] always carry a terminal status.
/// Handles are never reused across transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHandle {
    transaction_hash: Felt,
    status: TxStatus,
}

impl TransactionHandle {
    fn submitted(transaction_hash: Felt) -> Self {
        Self {
            transaction_hash,
            status: TxStatus::Submitted,
        }
    }

    fn into_terminal(mut self, status: TxStatus) -> Self {
        self.status = status;
        self
    }

    /// The transaction hash assigned at submission.
    pub fn transaction_hash(&self) -> Felt {
        self.transaction_hash
    }

    /// The transaction hash as 0x-prefixed hex text.
    pub fn hash_hex(&self) -> String {
        crate::codec::felt_to_hex(&self.transaction_hash)
    }

    /// The current lifecycle state.
    pub fn status(&self) -> TxStatus {
        self.status
    }

    pub fn is_accepted(&self) -> bool {
        self.status == TxStatus::Accepted
    }

    /// Converts an on-chain rejection into [`Erc721Error::Rejected`], for
    /// callers that treat rejection as a failure rather than an outcome.
    pub fn ensure_accepted(self) -> Result<Self> {
        match self.status {
            TxStatus::Rejected => Err(Erc721Error::Rejected {
                transaction_hash: self.hash_hex(),
            }),
            _ => Ok(self),
        }
    }
}

/// Drives a call batch through the submit → await-confirmation lifecycle.
///
/// The tracker owns no transaction state between invocations; each
/// `submit_and_await` call produces an independent handle, so any number of
/// them may be outstanding concurrently. Callers that share an account's
/// nonce sequence must serialize explicitly by awaiting one handle before
/// submitting the next.
///
/// Abandoning the await does not rescind the transaction: it keeps pursuing
/// its terminal state on chain.
#[derive(Builder, Clone, Debug)]
pub struct TransactionTracker<S, T, K> {
    submitter: S,
    status_source: T,
    clock: K,
    #[builder(default)]
    confirmation: ConfirmationConfig,
}

impl<S, T, K> TransactionTracker<S, T, K>
where
    S: SubmissionClient,
    T: StatusSource,
    K: Clock,
{
    /// Returns the confirmation polling configuration.
    pub fn confirmation(&self) -> ConfirmationConfig {
        self.confirmation
    }

    /// Submits the batch and blocks until the network reports a terminal
    /// state.
    ///
    /// # Errors
    ///
    /// - [`Erc721Error::SubmissionFailed`] if the signing collaborator
    ///   rejects the batch synchronously; nothing was submitted.
    /// - [`Erc721Error::ConfirmationTimeout`] if no terminal state is
    ///   observed within the configured polling window. The transaction may
    ///   still land afterwards.
    ///
    /// An on-chain rejection is not an error: the handle is returned with
    /// [`TxStatus::Rejected`] and the terminal transaction hash.
    pub async fn submit_and_await(&self, batch: &CallBatch) -> Result<TransactionHandle> {
        let span = spans::submit_and_await(
            batch.len(),
            self.confirmation.max_attempts,
            self.confirmation.poll_interval_secs,
        );
        let _guard = span.enter();

        let transaction_hash = self.submitter.submit(batch).await?;
        let handle = TransactionHandle::submitted(transaction_hash);
        info!(
            transaction_hash = %handle.hash_hex(),
            batch_size = batch.len(),
            event = "transaction_submitted"
        );

        let poll_interval = Duration::from_secs(self.confirmation.poll_interval_secs);
        for attempt in 1..=self.confirmation.max_attempts {
            match self.status_source.transaction_status(transaction_hash).await? {
                ConfirmationStatus::Accepted => {
                    info!(
                        transaction_hash = %handle.hash_hex(),
                        attempt = attempt,
                        event = "transaction_accepted"
                    );
                    return Ok(handle.into_terminal(TxStatus::Accepted));
                }
                ConfirmationStatus::Rejected => {
                    info!(
                        transaction_hash = %handle.hash_hex(),
                        attempt = attempt,
                        event = "transaction_rejected"
                    );
                    return Ok(handle.into_terminal(TxStatus::Rejected));
                }
                ConfirmationStatus::Pending => {
                    debug!(
                        transaction_hash = %handle.hash_hex(),
                        attempt = attempt,
                        event = "transaction_pending"
                    );
                    self.clock.sleep(poll_interval).await;
                }
            }
        }

        error!(
            transaction_hash = %handle.hash_hex(),
            total_duration_secs = self.confirmation.total_timeout_secs(),
            event = "confirmation_timeout"
        );
        Err(Erc721Error::ConfirmationTimeout)
    }
}
