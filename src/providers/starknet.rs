//! Starknet-backed implementations of the collaborator traits.

use async_trait::async_trait;
use starknet::{
    accounts::{Account, AccountFactory, ConnectedAccount, OpenZeppelinAccountFactory},
    core::{
        types::{
            BlockId, BlockTag, Call, Felt, FunctionCall, StarknetError,
            TransactionExecutionStatus, TransactionStatus,
        },
        utils::{get_contract_address, get_selector_from_name},
    },
    providers::{Provider, ProviderError},
    signers::{LocalWallet, SigningKey},
};
use tracing::{debug, info};

use crate::calls::{CallBatch, ContractCall};
use crate::codec::felt_to_hex;
use crate::error::{Erc721Error, Result};
use crate::tracker::ConfirmationStatus;
use crate::traits::{CallClient, StatusSource, SubmissionClient};

fn entrypoint_selector(name: &str) -> Result<Felt> {
    get_selector_from_name(name).map_err(|e| Erc721Error::InvalidCall {
        reason: format!("entrypoint {name:?}: {e}"),
    })
}

fn to_starknet_call(call: &ContractCall) -> Result<Call> {
    Ok(Call {
        to: call.to(),
        selector: entrypoint_selector(call.entrypoint())?,
        calldata: call.calldata().to_vec(),
    })
}

/// Submission client backed by a Starknet account.
///
/// The wrapped account owns the signing key, nonce management, and fee
/// handling; this client only translates batches into the account's call
/// format and forwards the assigned transaction hash.
///
/// # Examples
///
/// ```rust,no_run
/// use starknet_erc721_rs::providers::AccountSubmitter;
/// use starknet::{
///     accounts::{ExecutionEncoding, SingleOwnerAccount},
///     core::{chain_id, types::Felt},
///     macros::felt,
///     providers::{jsonrpc::HttpTransport, JsonRpcClient, Url},
///     signers::{LocalWallet, SigningKey},
/// };
///
/// let provider =
///     JsonRpcClient::new(HttpTransport::new(Url::parse("http://localhost:5050").unwrap()));
/// let signer = LocalWallet::from(SigningKey::from_secret_scalar(Felt::ONE));
/// let account = SingleOwnerAccount::new(
///     provider,
///     signer,
///     felt!("0x123"),
///     chain_id::SEPOLIA,
///     ExecutionEncoding::New,
/// );
///
/// let submitter = AccountSubmitter::new(account);
/// ```
#[derive(Debug, Clone)]
pub struct AccountSubmitter<A> {
    account: A,
}

impl<A> AccountSubmitter<A> {
    pub fn new(account: A) -> Self {
        Self { account }
    }
}

#[async_trait]
impl<A> SubmissionClient for AccountSubmitter<A>
where
    A: ConnectedAccount + Sync + Send,
{
    async fn submit(&self, batch: &CallBatch) -> Result<Felt> {
        let calls = batch
            .calls()
            .iter()
            .map(to_starknet_call)
            .collect::<Result<Vec<_>>>()?;

        debug!(batch_size = calls.len(), event = "batch_submission_started");

        let result = self
            .account
            .execute_v3(calls)
            .send()
            .await
            .map_err(|e| Erc721Error::SubmissionFailed {
                reason: e.to_string(),
            })?;

        info!(
            transaction_hash = %felt_to_hex(&result.transaction_hash),
            batch_size = batch.len(),
            event = "batch_submitted"
        );
        Ok(result.transaction_hash)
    }
}

/// Confirmation status source over a Starknet JSON-RPC provider.
///
/// Maps the node's transaction status onto the tracker's three-state view:
/// `Received` and a not-yet-visible hash report pending; acceptance on L2
/// or L1 with a successful execution reports accepted; rejection or a
/// reverted execution reports rejected.
#[derive(Debug, Clone)]
pub struct RpcStatusSource<P> {
    provider: P,
}

impl<P> RpcStatusSource<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> StatusSource for RpcStatusSource<P>
where
    P: Provider + Sync + Send,
{
    async fn transaction_status(&self, transaction_hash: Felt) -> Result<ConfirmationStatus> {
        match self.provider.get_transaction_status(transaction_hash).await {
            Ok(TransactionStatus::Received) => Ok(ConfirmationStatus::Pending),
            Ok(TransactionStatus::Rejected) => Ok(ConfirmationStatus::Rejected),
            Ok(TransactionStatus::AcceptedOnL2(execution))
            | Ok(TransactionStatus::AcceptedOnL1(execution)) => Ok(match execution {
                TransactionExecutionStatus::Succeeded => ConfirmationStatus::Accepted,
                TransactionExecutionStatus::Reverted => ConfirmationStatus::Rejected,
            }),
            // The node has not seen the hash yet; report pending and let
            // the tracker retry.
            Err(ProviderError::StarknetError(StarknetError::TransactionHashNotFound)) => {
                debug!(
                    transaction_hash = %felt_to_hex(&transaction_hash),
                    event = "transaction_hash_not_found"
                );
                Ok(ConfirmationStatus::Pending)
            }
            Err(e) => Err(Erc721Error::Provider(e.to_string())),
        }
    }
}

/// Read-only call client over a Starknet JSON-RPC provider.
///
/// Executes calls against the latest block; never submits a transaction.
#[derive(Debug, Clone)]
pub struct RpcCaller<P> {
    provider: P,
}

impl<P> RpcCaller<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> CallClient for RpcCaller<P>
where
    P: Provider + Sync + Send,
{
    async fn call(&self, call: &ContractCall) -> Result<Vec<Felt>> {
        let request = FunctionCall {
            contract_address: call.to(),
            entry_point_selector: entrypoint_selector(call.entrypoint())?,
            calldata: call.calldata().to_vec(),
        };
        self.provider
            .call(request, BlockId::Tag(BlockTag::Latest))
            .await
            .map_err(|e| Erc721Error::Provider(e.to_string()))
    }
}

/// Freshly generated account credentials with the counterfactual address
/// they will deploy to.
#[derive(Debug, Clone)]
pub struct ProvisionedAccount {
    pub address: Felt,
    pub public_key: Felt,
    pub private_key: Felt,
}

/// Generates a random key pair and computes the counterfactual address of
/// the account contract it controls.
///
/// The public key doubles as the address salt, so the same key pair always
/// maps to the same address for a given class hash. No network interaction
/// happens here; the address must be funded before [`deploy_account`] can
/// land the deployment transaction.
pub fn provision_account(class_hash: Felt) -> ProvisionedAccount {
    let signing_key = SigningKey::from_random();
    let public_key = signing_key.verifying_key().scalar();
    let address = get_contract_address(public_key, class_hash, &[public_key], Felt::ZERO);

    info!(
        account_address = %felt_to_hex(&address),
        event = "account_provisioned"
    );
    ProvisionedAccount {
        address,
        public_key,
        private_key: signing_key.secret_scalar(),
    }
}

/// Deploys a provisioned account contract through an OpenZeppelin account
/// factory, returning the deployment transaction hash.
///
/// The counterfactual address (see [`provision_account`]) must already
/// hold enough fee tokens to pay for its own deployment; fee funding is
/// the caller's concern.
pub async fn deploy_account<P>(
    provider: P,
    chain_id: Felt,
    class_hash: Felt,
    private_key: Felt,
) -> Result<Felt>
where
    P: Provider + Sync + Send,
{
    let signing_key = SigningKey::from_secret_scalar(private_key);
    let salt = signing_key.verifying_key().scalar();
    let signer = LocalWallet::from(signing_key);

    let factory = OpenZeppelinAccountFactory::new(class_hash, chain_id, signer, provider)
        .await
        .map_err(|e| Erc721Error::Provider(e.to_string()))?;

    let result = factory
        .deploy_v3(salt)
        .send()
        .await
        .map_err(|e| Erc721Error::SubmissionFailed {
            reason: e.to_string(),
        })?;

    info!(
        transaction_hash = %felt_to_hex(&result.transaction_hash),
        account_address = %felt_to_hex(&result.contract_address),
        event = "account_deployment_submitted"
    );
    Ok(result.transaction_hash)
}
