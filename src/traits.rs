//! Core trait abstractions for the network collaborators.
//!
//! This module defines the seams between the pure codec/batch layer and
//! the external chain client: transaction signing and submission, status
//! queries, read-only calls, and time. Abstracting them behind traits
//! enables dependency injection and comprehensive testing, including
//! adversarial scenarios, without a running network.
//!
//! Production implementations over the `starknet` crate live in
//! [`crate::providers`]; scriptable fakes live in [`crate::testing`].

use async_trait::async_trait;
use starknet::core::types::Felt;
use std::time::Duration;

use crate::calls::{CallBatch, ContractCall};
use crate::error::Result;
use crate::tracker::ConfirmationStatus;

/// Trait for transaction signing and submission.
///
/// The implementation owns key material, nonce management, fee estimation,
/// and wire serialization. This crate only hands it a batch and receives
/// the assigned transaction hash.
///
/// # Test Scenarios
///
/// Implementing this trait with fakes enables testing:
/// - Synchronous submission rejection (malformed batch, signer failure)
/// - Inspection of exactly what was submitted, in order
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Signs and submits the batch as a single atomic transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch is rejected before it reaches the
    /// network; nothing was submitted in that case.
    async fn submit(&self, batch: &CallBatch) -> Result<Felt>;
}

/// Trait for transaction status queries.
///
/// A single fetch of the current confirmation state; the lifecycle tracker
/// owns the polling loop around it.
///
/// # Test Scenarios
///
/// Implementing this trait with fakes enables testing:
/// - State progressions (Pending → Accepted / Rejected)
/// - Transactions that never reach a terminal state (timeout paths)
/// - Provider failures mid-confirmation
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the current confirmation status of a transaction.
    ///
    /// A hash the network does not know about yet reports
    /// [`ConfirmationStatus::Pending`]; propagation delay is
    /// indistinguishable from not-yet-executed at this boundary.
    async fn transaction_status(&self, transaction_hash: Felt) -> Result<ConfirmationStatus>;
}

/// Trait for read-only contract calls.
///
/// Used by the query side (name, symbol, token URI); never submits a
/// transaction.
#[async_trait]
pub trait CallClient: Send + Sync {
    /// Executes the call against the latest state and returns the raw felt
    /// response.
    async fn call(&self, call: &ContractCall) -> Result<Vec<Felt>>;
}

/// Trait for time-based operations.
///
/// Abstracts the sleep between confirmation polls, so tests can
/// fast-forward through polling loops and timeouts without waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Asynchronously sleeps for the given duration.
    async fn sleep(&self, duration: Duration);
}
