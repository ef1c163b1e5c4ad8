//! Test utilities and fake implementations of the collaborator traits.
//!
//! This module provides fake/mock implementations of the traits in
//! [`crate::traits`] that enable comprehensive testing, including
//! adversarial scenarios, without a running network.
//!
//! The fakes are designed for integration tests that verify the lifecycle
//! tracker and orchestrators under conditions like timeouts, rejected
//! transactions, and submission failures.

use async_trait::async_trait;
use starknet::core::types::Felt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::calls::{CallBatch, ContractCall};
use crate::error::{Erc721Error, Result};
use crate::tracker::ConfirmationStatus;
use crate::traits::{CallClient, Clock, StatusSource, SubmissionClient};

// ============================================================================
// Fake Submission Client
// ============================================================================

/// A fake submission client that records every submitted batch.
///
/// This allows testing scenarios like:
/// - Inspection of exactly what was submitted, in order
/// - Synchronous submission rejection
#[derive(Clone, Debug)]
pub struct FakeSubmitter {
    transaction_hash: Felt,
    rejection: Arc<Mutex<Option<String>>>,
    submitted: Arc<Mutex<Vec<CallBatch>>>,
}

impl FakeSubmitter {
    /// Creates a submitter that assigns `transaction_hash` to every batch.
    pub fn new(transaction_hash: Felt) -> Self {
        Self {
            transaction_hash,
            rejection: Arc::new(Mutex::new(None)),
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure every subsequent submission to fail synchronously.
    pub fn reject_with(&self, reason: &str) {
        *self.rejection.lock().unwrap() = Some(reason.to_string());
    }

    /// Batches submitted so far, in submission order.
    pub fn submitted_batches(&self) -> Vec<CallBatch> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionClient for FakeSubmitter {
    async fn submit(&self, batch: &CallBatch) -> Result<Felt> {
        if let Some(reason) = self.rejection.lock().unwrap().clone() {
            return Err(Erc721Error::SubmissionFailed { reason });
        }
        self.submitted.lock().unwrap().push(batch.clone());
        Ok(self.transaction_hash)
    }
}

// ============================================================================
// Fake Status Source
// ============================================================================

/// A fake status source that replays scripted confirmation sequences.
///
/// This allows testing scenarios like:
/// - Immediate acceptance or rejection
/// - Pending → terminal progressions
/// - Transactions that never become terminal (timeout paths)
/// - Provider failures mid-confirmation
#[derive(Clone, Debug, Default)]
pub struct FakeStatusSource {
    responses: Arc<Mutex<HashMap<Felt, Vec<ConfirmationStatus>>>>,
    next_index: Arc<Mutex<HashMap<Felt, usize>>>,
    call_counts: Arc<Mutex<HashMap<Felt, usize>>>,
    failures: Arc<Mutex<Vec<Felt>>>,
}

impl FakeStatusSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a sequence of statuses for a transaction hash.
    ///
    /// Each query returns the next status in the sequence; the final one
    /// repeats once the sequence is exhausted. This allows testing
    /// progressions like Pending → Pending → Accepted.
    pub fn add_status_sequence(&self, transaction_hash: Felt, statuses: Vec<ConfirmationStatus>) {
        self.responses
            .lock()
            .unwrap()
            .insert(transaction_hash, statuses);
        self.next_index.lock().unwrap().insert(transaction_hash, 0);
    }

    /// Configure immediate acceptance.
    pub fn add_accepted(&self, transaction_hash: Felt) {
        self.add_status_sequence(transaction_hash, vec![ConfirmationStatus::Accepted]);
    }

    /// Configure immediate rejection.
    pub fn add_rejected(&self, transaction_hash: Felt) {
        self.add_status_sequence(transaction_hash, vec![ConfirmationStatus::Rejected]);
    }

    /// Configure a transaction that never becomes terminal (for timeout
    /// testing). An unconfigured hash behaves the same way.
    pub fn add_always_pending(&self, transaction_hash: Felt) {
        self.add_status_sequence(transaction_hash, vec![ConfirmationStatus::Pending]);
    }

    /// Configure a transaction hash to return a provider error.
    pub fn add_failure(&self, transaction_hash: Felt) {
        self.failures.lock().unwrap().push(transaction_hash);
    }

    /// Number of status queries made for a transaction hash.
    pub fn get_call_count(&self, transaction_hash: Felt) -> usize {
        self.call_counts
            .lock()
            .unwrap()
            .get(&transaction_hash)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl StatusSource for FakeStatusSource {
    async fn transaction_status(&self, transaction_hash: Felt) -> Result<ConfirmationStatus> {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(transaction_hash)
            .or_insert(0) += 1;

        if self.failures.lock().unwrap().contains(&transaction_hash) {
            return Err(Erc721Error::Provider("simulated RPC error".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        let Some(sequence) = responses.get(&transaction_hash) else {
            // Unknown hashes look pending, matching the trait contract for
            // transactions the network has not seen yet.
            return Ok(ConfirmationStatus::Pending);
        };

        let mut indices = self.next_index.lock().unwrap();
        let index = indices.entry(transaction_hash).or_insert(0);
        let status = sequence[(*index).min(sequence.len() - 1)];
        *index += 1;
        Ok(status)
    }
}

// ============================================================================
// Fake Call Client
// ============================================================================

/// A fake read-call client keyed by entrypoint name.
#[derive(Clone, Debug, Default)]
pub struct FakeCallClient {
    responses: Arc<Mutex<HashMap<String, Vec<Felt>>>>,
    calls: Arc<Mutex<Vec<ContractCall>>>,
}

impl FakeCallClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the felt response returned for an entrypoint.
    pub fn add_response(&self, entrypoint: &str, response: Vec<Felt>) {
        self.responses
            .lock()
            .unwrap()
            .insert(entrypoint.to_string(), response);
    }

    /// Calls executed so far, in order.
    pub fn recorded_calls(&self) -> Vec<ContractCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CallClient for FakeCallClient {
    async fn call(&self, call: &ContractCall) -> Result<Vec<Felt>> {
        self.calls.lock().unwrap().push(call.clone());
        self.responses
            .lock()
            .unwrap()
            .get(call.entrypoint())
            .cloned()
            .ok_or_else(|| Erc721Error::Provider(format!(
                "no response configured for entrypoint {:?}",
                call.entrypoint()
            )))
    }
}

// ============================================================================
// Fake Clock
// ============================================================================

/// A fake clock that records sleeps and returns immediately, enabling
/// fast-forward testing of polling loops and timeouts.
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sleeps requested so far.
    pub fn sleep_count(&self) -> usize {
        self.sleeps.lock().unwrap().len()
    }

    /// Sum of all requested sleep durations.
    pub fn total_sleep_time(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Clock for FakeClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
