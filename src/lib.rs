//! # starknet-erc721-rs
//!
//! A production-ready Rust SDK for deploying and operating ERC-721
//! contracts on Starknet.
//!
//! This library provides a safe, ergonomic interface for the full token
//! lifecycle — deployment, minting, URI assignment, transfer, burn, and
//! arbitrary multicalls — built on a precise string/token-id codec and an
//! atomic call-batch layer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starknet_erc721_rs::{
//!     providers::{AccountSubmitter, RpcStatusSource, TokioClock},
//!     Erc721Ops, TransactionTracker,
//! };
//! use starknet::{
//!     accounts::{ExecutionEncoding, SingleOwnerAccount},
//!     core::{chain_id, types::Felt},
//!     macros::felt,
//!     providers::{jsonrpc::HttpTransport, JsonRpcClient, Url},
//!     signers::{LocalWallet, SigningKey},
//! };
//! use alloy_primitives::U256;
//!
//! # async fn example() -> Result<(), starknet_erc721_rs::Erc721Error> {
//! // Set up the account that signs and submits batches
//! let rpc_url = Url::parse("http://localhost:5050").unwrap();
//! let signer = LocalWallet::from(SigningKey::from_secret_scalar(Felt::ONE));
//! let account = SingleOwnerAccount::new(
//!     JsonRpcClient::new(HttpTransport::new(rpc_url.clone())),
//!     signer,
//!     felt!("0x123"),
//!     chain_id::SEPOLIA,
//!     ExecutionEncoding::New,
//! );
//!
//! // Wire the collaborators into a lifecycle tracker
//! let tracker = TransactionTracker::builder()
//!     .submitter(AccountSubmitter::new(account))
//!     .status_source(RpcStatusSource::new(JsonRpcClient::new(HttpTransport::new(rpc_url))))
//!     .clock(TokioClock::new())
//!     .build();
//!
//! let nft = Erc721Ops::builder()
//!     .contract_address(felt!("0x456"))
//!     .tracker(tracker)
//!     .build();
//!
//! // Mint token ids 10, 11, 12 in one atomic transaction
//! let handle = nft.mint(felt!("0x789"), U256::from(10u64), 3).await?;
//! println!("minted in {}", handle.hash_hex());
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Precise value codec**: 31-byte string chunking and 128/128 token-id
//!   splitting with strict round-trip guarantees
//! - **Atomic multicalls**: ordered, non-empty call batches that land as a
//!   single transaction
//! - **Submit → await lifecycle**: one suspension point, terminal-state
//!   handles, rejection reported as an outcome rather than an error
//! - **Trait-based collaborators** enabling fakes for comprehensive testing
//! - **Builder pattern** for intuitive API usage
//!
//! ## Public API
//!
//! - Codec: [`string_to_felts`], [`felts_to_string`], [`bytes_to_felt`],
//!   [`encode_short_string`], [`parse_token_id`], [`split_token_id`]
//! - Call building: [`ContractCall`], [`CallBatch`]
//! - Lifecycle: [`TransactionTracker`], [`TransactionHandle`],
//!   [`TxStatus`], [`ConfirmationConfig`]
//! - Operations: [`Erc721Ops`], [`Erc721Reader`], [`ContractDeployer`]
//! - Collaborator traits: [`SubmissionClient`], [`StatusSource`],
//!   [`CallClient`], [`Clock`]

mod calls;
mod codec;
mod config;
mod erc721;
mod error;
mod tracker;
mod traits;

pub use calls::{CallBatch, ContractCall};
pub use codec::{
    bytes_to_felt, encode_short_string, felt_to_bytes, felt_to_hex, felts_to_string,
    hex_to_ascii, parse_token_id, split_token_id, string_to_felts, Uint256Parts,
    MAX_BYTES_PER_FELT,
};
pub use config::{ConfirmationConfig, RpcConfig};
pub use erc721::{
    ContractDeployer, DeployedContract, Erc721Ops, Erc721Reader, ENTRYPOINT_BURN,
    ENTRYPOINT_MINT, ENTRYPOINT_NAME, ENTRYPOINT_SET_TOKEN_URI, ENTRYPOINT_SYMBOL,
    ENTRYPOINT_TOKEN_URI, ENTRYPOINT_TRANSFER_FROM, UDC_ADDRESS,
};
pub use error::{Erc721Error, Result};
pub use tracker::{ConfirmationStatus, TransactionHandle, TransactionTracker, TxStatus};
pub use traits::{CallClient, Clock, StatusSource, SubmissionClient};

// Production trait implementations over the `starknet` crate
pub mod providers;

// Public module for advanced users who need custom instrumentation
pub mod spans;

// Fake collaborator implementations for tests
pub mod testing;
