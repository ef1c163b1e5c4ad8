//! Integration tests for ERC-721 orchestration using fake collaborators
//!
//! These tests exercise the full composition — codec, call builder,
//! lifecycle tracker, orchestrators — through the trait seams, without a
//! running network.

use alloy_primitives::U256;
use starknet::core::types::Felt;
use starknet::core::utils::{get_udc_deployed_address, UdcUniqueness};
use starknet::macros::felt;
use starknet_erc721_rs::testing::{FakeCallClient, FakeClock, FakeStatusSource, FakeSubmitter};
use starknet_erc721_rs::{
    bytes_to_felt, encode_short_string, string_to_felts, CallBatch, ConfirmationConfig,
    ConfirmationStatus, ContractCall, ContractDeployer, Erc721Error, Erc721Ops, Erc721Reader,
    TransactionTracker, TxStatus, ENTRYPOINT_MINT, ENTRYPOINT_SET_TOKEN_URI,
    ENTRYPOINT_TOKEN_URI, UDC_ADDRESS,
};
use std::time::Duration;

const TX_HASH: Felt = felt!("0xdeadbeef");
const CONTRACT: Felt = felt!("0x1111");
const RECIPIENT: Felt = felt!("0x2222");

/// Helper to create a tracker over fake collaborators.
fn create_test_tracker(
    submitter: FakeSubmitter,
    status_source: FakeStatusSource,
    clock: FakeClock,
    confirmation: ConfirmationConfig,
) -> TransactionTracker<FakeSubmitter, FakeStatusSource, FakeClock> {
    TransactionTracker::builder()
        .submitter(submitter)
        .status_source(status_source)
        .clock(clock)
        .confirmation(confirmation)
        .build()
}

/// Helper to create ERC-721 ops over fake collaborators with an
/// immediately-accepting status source.
fn create_accepting_ops(
    submitter: FakeSubmitter,
) -> Erc721Ops<FakeSubmitter, FakeStatusSource, FakeClock> {
    let status_source = FakeStatusSource::new();
    status_source.add_accepted(TX_HASH);
    Erc721Ops::builder()
        .contract_address(CONTRACT)
        .tracker(create_test_tracker(
            submitter,
            status_source,
            FakeClock::new(),
            ConfirmationConfig::devnet(),
        ))
        .build()
}

fn single_call_batch() -> CallBatch {
    CallBatch::single(ContractCall::new(CONTRACT, "mint", vec![Felt::ONE]))
}

#[tokio::test]
async fn test_confirmation_timeout_with_fake_clock() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let status_source = FakeStatusSource::new();
    let clock = FakeClock::new();
    status_source.add_always_pending(TX_HASH);

    let max_attempts = 5;
    let poll_interval = 60;
    let tracker = create_test_tracker(
        submitter,
        status_source.clone(),
        clock.clone(),
        ConfirmationConfig::default()
            .with_max_attempts(max_attempts)
            .with_poll_interval_secs(poll_interval),
    );

    let result = tracker.submit_and_await(&single_call_batch()).await;

    assert!(result.is_err(), "Expected timeout error");
    assert!(
        matches!(result.unwrap_err(), Erc721Error::ConfirmationTimeout),
        "Expected ConfirmationTimeout error"
    );

    assert_eq!(
        clock.sleep_count(),
        max_attempts as usize,
        "Should have slept once per attempt"
    );
    assert_eq!(
        clock.total_sleep_time(),
        Duration::from_secs(poll_interval * max_attempts as u64),
        "Total sleep time should match poll_interval * max_attempts"
    );
    assert_eq!(
        status_source.get_call_count(TX_HASH),
        max_attempts as usize,
        "Should have queried the status source once per attempt"
    );
}

#[tokio::test]
async fn test_status_progression_to_acceptance() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let status_source = FakeStatusSource::new();
    let clock = FakeClock::new();
    status_source.add_status_sequence(
        TX_HASH,
        vec![
            ConfirmationStatus::Pending,
            ConfirmationStatus::Pending,
            ConfirmationStatus::Accepted,
        ],
    );

    let tracker = create_test_tracker(
        submitter,
        status_source.clone(),
        clock.clone(),
        ConfirmationConfig::default().with_poll_interval_secs(5),
    );

    let handle = tracker.submit_and_await(&single_call_batch()).await.unwrap();

    assert!(handle.is_accepted());
    assert_eq!(handle.transaction_hash(), TX_HASH);
    assert_eq!(
        status_source.get_call_count(TX_HASH),
        3,
        "Should progress through Pending → Pending → Accepted"
    );
    assert_eq!(
        clock.sleep_count(),
        2,
        "Should sleep once after each pending response"
    );
    assert_eq!(clock.total_sleep_time(), Duration::from_secs(10));
}

#[tokio::test]
async fn test_rejection_is_reported_not_raised() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let status_source = FakeStatusSource::new();
    status_source.add_rejected(TX_HASH);

    let tracker = create_test_tracker(
        submitter,
        status_source,
        FakeClock::new(),
        ConfirmationConfig::devnet(),
    );

    let handle = tracker.submit_and_await(&single_call_batch()).await.unwrap();

    assert_eq!(
        handle.status(),
        TxStatus::Rejected,
        "Rejection is a reported outcome with the terminal hash"
    );
    assert_eq!(handle.transaction_hash(), TX_HASH);

    let err = handle.ensure_accepted().unwrap_err();
    assert!(
        matches!(err, Erc721Error::Rejected { .. }),
        "ensure_accepted converts the outcome into an error"
    );
}

#[tokio::test]
async fn test_submission_failure_surfaces_without_polling() {
    let submitter = FakeSubmitter::new(TX_HASH);
    submitter.reject_with("insufficient account balance");
    let status_source = FakeStatusSource::new();
    let clock = FakeClock::new();

    let tracker = create_test_tracker(
        submitter,
        status_source.clone(),
        clock.clone(),
        ConfirmationConfig::devnet(),
    );

    let result = tracker.submit_and_await(&single_call_batch()).await;

    assert!(matches!(
        result.unwrap_err(),
        Erc721Error::SubmissionFailed { .. }
    ));
    assert_eq!(
        status_source.get_call_count(TX_HASH),
        0,
        "Nothing was submitted, so nothing should be polled"
    );
    assert_eq!(clock.sleep_count(), 0);
}

#[tokio::test]
async fn test_provider_failure_mid_confirmation() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let status_source = FakeStatusSource::new();
    status_source.add_failure(TX_HASH);

    let tracker = create_test_tracker(
        submitter,
        status_source,
        FakeClock::new(),
        ConfirmationConfig::devnet(),
    );

    let result = tracker.submit_and_await(&single_call_batch()).await;
    assert!(matches!(result.unwrap_err(), Erc721Error::Provider(_)));
}

#[tokio::test]
async fn test_mint_builds_sequential_batch() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let ops = create_accepting_ops(submitter.clone());

    let handle = ops.mint(RECIPIENT, U256::from(10u64), 3).await.unwrap();
    assert!(handle.is_accepted());

    let batches = submitter.submitted_batches();
    assert_eq!(batches.len(), 1, "One atomic batch");
    let calls = batches[0].calls();
    assert_eq!(calls.len(), 3, "One call per minted token");

    for (index, call) in calls.iter().enumerate() {
        assert_eq!(call.to(), CONTRACT);
        assert_eq!(call.entrypoint(), ENTRYPOINT_MINT);
        assert_eq!(
            call.calldata(),
            &[RECIPIENT, Felt::from(10 + index as u64), Felt::ZERO],
            "Token ids 10, 11, 12 in ascending order"
        );
    }
}

#[tokio::test]
async fn test_set_token_uri_calldata_shape() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let ops = create_accepting_ops(submitter.clone());

    // tokenId=1, 12-byte CID: calldata must be [low, high, length, chunk]
    ops.set_token_uri(U256::from(1u64), 1, "QmExampleCID")
        .await
        .unwrap();

    let batches = submitter.submitted_batches();
    let calls = batches[0].calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].entrypoint(), ENTRYPOINT_SET_TOKEN_URI);
    assert_eq!(
        calls[0].calldata(),
        &[
            Felt::ONE,
            Felt::ZERO,
            Felt::ONE,
            bytes_to_felt(b"QmExampleCID").unwrap(),
        ]
    );
}

#[tokio::test]
async fn test_mint_with_uri_is_one_atomic_batch() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let ops = create_accepting_ops(submitter.clone());

    ops.mint_with_uri(RECIPIENT, U256::from(7u64), "QmExampleCID")
        .await
        .unwrap();

    let batches = submitter.submitted_batches();
    assert_eq!(batches.len(), 1, "Mint and set-URI land in one transaction");
    let calls = batches[0].calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].entrypoint(), ENTRYPOINT_MINT);
    assert_eq!(calls[1].entrypoint(), ENTRYPOINT_SET_TOKEN_URI);
}

#[tokio::test]
async fn test_zero_mint_amount_is_rejected_before_submission() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let ops = create_accepting_ops(submitter.clone());

    let result = ops.mint(RECIPIENT, U256::from(1u64), 0).await;
    assert!(matches!(
        result.unwrap_err(),
        Erc721Error::InvalidCall { .. }
    ));
    assert!(submitter.submitted_batches().is_empty());
}

#[tokio::test]
async fn test_zero_recipient_is_rejected_before_submission() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let ops = create_accepting_ops(submitter.clone());

    let result = ops.mint(Felt::ZERO, U256::from(1u64), 1).await;
    assert!(matches!(
        result.unwrap_err(),
        Erc721Error::InvalidCall { .. }
    ));
    assert!(submitter.submitted_batches().is_empty());
}

#[tokio::test]
async fn test_transfer_and_burn_calldata() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let ops = create_accepting_ops(submitter.clone());
    let sender = felt!("0x3333");

    ops.transfer(sender, RECIPIENT, U256::from(5u64)).await.unwrap();
    ops.burn(U256::from(5u64)).await.unwrap();

    let batches = submitter.submitted_batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(
        batches[0].calls()[0].calldata(),
        &[sender, RECIPIENT, Felt::from(5u64), Felt::ZERO]
    );
    assert_eq!(
        batches[1].calls()[0].calldata(),
        &[Felt::from(5u64), Felt::ZERO]
    );
}

#[tokio::test]
async fn test_multicall_passthrough_preserves_batch() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let ops = create_accepting_ops(submitter.clone());

    let other_contract = felt!("0x9999");
    let batch = CallBatch::new(vec![
        ContractCall::new(CONTRACT, "mint", vec![RECIPIENT, Felt::ONE, Felt::ZERO]),
        ContractCall::new(other_contract, "approve", vec![RECIPIENT, Felt::TWO]),
    ])
    .unwrap();

    ops.execute(&batch).await.unwrap();

    let batches = submitter.submitted_batches();
    assert_eq!(batches[0], batch, "Batch submitted unchanged");
}

#[tokio::test]
async fn test_deploy_erc721_calldata_and_address() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let status_source = FakeStatusSource::new();
    status_source.add_accepted(TX_HASH);

    let deployer = ContractDeployer::builder()
        .tracker(create_test_tracker(
            submitter.clone(),
            status_source,
            FakeClock::new(),
            ConfirmationConfig::devnet(),
        ))
        .build();

    let class_hash = felt!("0xc1a55");
    let salt = Felt::from(1u64);
    let owner = felt!("0x4444");
    let deployed = deployer
        .deploy_erc721(class_hash, salt, "CodelightNFT", "CFT", owner)
        .await
        .unwrap();

    assert!(deployed.transaction.is_accepted());

    let expected_ctor = vec![
        encode_short_string("CodelightNFT").unwrap(),
        encode_short_string("CFT").unwrap(),
        owner,
    ];
    assert_eq!(
        deployed.contract_address,
        get_udc_deployed_address(salt, class_hash, &UdcUniqueness::NotUnique, &expected_ctor)
    );

    let batches = submitter.submitted_batches();
    let call = &batches[0].calls()[0];
    assert_eq!(call.to(), UDC_ADDRESS);
    assert_eq!(
        call.calldata(),
        &[
            class_hash,
            salt,
            Felt::ZERO,
            Felt::THREE,
            expected_ctor[0],
            expected_ctor[1],
            expected_ctor[2],
        ]
    );
}

#[tokio::test]
async fn test_reader_decodes_token_uri() {
    let client = FakeCallClient::new();
    let uri = "ipfs://QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG/42.json";
    let chunks = string_to_felts(uri).unwrap();
    let mut response = vec![Felt::from(chunks.len() as u64)];
    response.extend_from_slice(&chunks);
    client.add_response(ENTRYPOINT_TOKEN_URI, response);

    let reader = Erc721Reader::builder()
        .contract_address(CONTRACT)
        .client(client.clone())
        .build();

    assert_eq!(reader.token_uri(U256::from(1u64)).await.unwrap(), uri);

    let calls = client.recorded_calls();
    assert_eq!(calls[0].to(), CONTRACT);
    assert_eq!(
        calls[0].calldata(),
        &[Felt::ONE, Felt::ZERO],
        "Token id crosses the call boundary as its low/high split"
    );
}

#[tokio::test]
async fn test_reader_decodes_name_and_symbol() {
    let client = FakeCallClient::new();
    client.add_response("name", vec![encode_short_string("CodelightNFT").unwrap()]);
    client.add_response("symbol", vec![encode_short_string("CFT").unwrap()]);

    let reader = Erc721Reader::builder()
        .contract_address(CONTRACT)
        .client(client)
        .build();

    assert_eq!(reader.name().await.unwrap(), "CodelightNFT");
    assert_eq!(reader.symbol().await.unwrap(), "CFT");
}

#[tokio::test]
async fn test_concurrent_lifecycles_are_independent() {
    let submitter = FakeSubmitter::new(TX_HASH);
    let status_source = FakeStatusSource::new();
    status_source.add_status_sequence(
        TX_HASH,
        vec![ConfirmationStatus::Pending, ConfirmationStatus::Accepted],
    );

    let tracker = create_test_tracker(
        submitter,
        status_source,
        FakeClock::new(),
        ConfirmationConfig::devnet(),
    );

    // Many independent waits may be outstanding at once; each produces its
    // own handle with no shared state.
    let batch_a = single_call_batch();
    let batch_b = single_call_batch();
    let (a, b) = tokio::join!(
        tracker.submit_and_await(&batch_a),
        tracker.submit_and_await(&batch_b),
    );
    assert!(a.unwrap().is_accepted());
    assert!(b.unwrap().is_accepted());
}
