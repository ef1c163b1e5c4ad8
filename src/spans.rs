//! Span helpers for SDK operations
//!
//! This module provides orthogonal span instrumentation following
//! production best practices: static span names, structured attributes,
//! and separation from business logic.
//!
//! The helpers are used internally by the lifecycle tracker and the
//! operation orchestrators, and exposed publicly for users who need custom
//! instrumentation or want to integrate with existing OpenTelemetry setups.

use starknet::core::types::Felt;
use tracing::Span;

use crate::codec::felt_to_hex;

/// Create span for driving a batch through submit → await-confirmation.
///
/// Parent: operation span (auto-attached by tracing)
/// Children: submission and status-poll calls from the providers
#[inline]
pub fn submit_and_await(batch_size: usize, max_attempts: u32, poll_interval_secs: u64) -> Span {
    tracing::info_span!(
        "starknet_erc721.submit_and_await",
        batch_size = batch_size,
        max_attempts = max_attempts,
        poll_interval_secs = poll_interval_secs,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for a single ERC-721 write operation.
///
/// Parent: caller's span
/// Children: starknet_erc721.submit_and_await
#[inline]
pub fn erc721_operation(operation: &'static str, contract_address: &Felt) -> Span {
    tracing::info_span!(
        "starknet_erc721.operation",
        operation = operation,
        contract_address = %felt_to_hex(contract_address),
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for a contract deployment through the Universal Deployer.
///
/// Parent: caller's span
/// Children: starknet_erc721.submit_and_await
#[inline]
pub fn deploy_contract(class_hash: &Felt, salt: &Felt) -> Span {
    tracing::info_span!(
        "starknet_erc721.deploy_contract",
        class_hash = %felt_to_hex(class_hash),
        salt = %felt_to_hex(salt),
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}
