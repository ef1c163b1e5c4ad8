use bon::Builder;
use starknet::core::types::Felt;
use starknet::core::utils::{get_udc_deployed_address, UdcUniqueness};
use starknet::macros::felt;
use tracing::info;

use crate::calls::{CallBatch, ContractCall};
use crate::codec::{encode_short_string, felt_to_hex};
use crate::error::Result;
use crate::spans;
use crate::tracker::{TransactionHandle, TransactionTracker};
use crate::traits::{Clock, StatusSource, SubmissionClient};

use super::ensure_address;

/// Address of the Universal Deployer Contract, identical across networks.
pub const UDC_ADDRESS: Felt =
    felt!("0x041a78e741e5af2fec34b695679bc6891742439f7afb8484ecd7766661ad02bf");

const ENTRYPOINT_DEPLOY_CONTRACT: &str = "deployContract";

/// Outcome of a contract deployment.
#[derive(Debug, Clone)]
pub struct DeployedContract {
    /// The address the contract deployed to, computed from the salt and
    /// class hash before submission.
    pub contract_address: Felt,
    /// Terminal handle of the deployment transaction.
    pub transaction: TransactionHandle,
}

/// Deploys contract classes through the Universal Deployer Contract.
///
/// Deployment is an ordinary account transaction: a single call to the
/// deployer's `deployContract` entrypoint, driven through the same
/// lifecycle tracker as every other write operation.
#[derive(Builder, Clone, Debug)]
pub struct ContractDeployer<S, T, K> {
    tracker: TransactionTracker<S, T, K>,
    #[builder(default = UDC_ADDRESS)]
    deployer_address: Felt,
}

impl<S, T, K> ContractDeployer<S, T, K>
where
    S: SubmissionClient,
    T: StatusSource,
    K: Clock,
{
    /// Deploys an instance of `class_hash` with the given constructor
    /// calldata and blocks until the deployment transaction is terminal.
    ///
    /// The deployment is not salted per-deployer, so the resulting address
    /// depends only on the salt, class hash, and constructor calldata.
    pub async fn deploy(
        &self,
        class_hash: Felt,
        salt: Felt,
        constructor_calldata: &[Felt],
    ) -> Result<DeployedContract> {
        let span = spans::deploy_contract(&class_hash, &salt);
        let _guard = span.enter();

        let contract_address = get_udc_deployed_address(
            salt,
            class_hash,
            &UdcUniqueness::NotUnique,
            constructor_calldata,
        );
        let call = deploy_call(self.deployer_address, class_hash, salt, constructor_calldata);

        let transaction = self.tracker.submit_and_await(&CallBatch::single(call)).await?;
        info!(
            contract_address = %felt_to_hex(&contract_address),
            transaction_hash = %transaction.hash_hex(),
            event = "contract_deployed"
        );
        Ok(DeployedContract {
            contract_address,
            transaction,
        })
    }

    /// Deploys an ERC-721 class with the `(name, symbol, owner)`
    /// constructor, encoding name and symbol as short strings.
    pub async fn deploy_erc721(
        &self,
        class_hash: Felt,
        salt: Felt,
        name: &str,
        symbol: &str,
        owner: Felt,
    ) -> Result<DeployedContract> {
        ensure_address("owner", owner)?;
        let constructor_calldata = vec![
            encode_short_string(name)?,
            encode_short_string(symbol)?,
            owner,
        ];
        self.deploy(class_hash, salt, &constructor_calldata).await
    }
}

fn deploy_call(
    deployer: Felt,
    class_hash: Felt,
    salt: Felt,
    constructor_calldata: &[Felt],
) -> ContractCall {
    let mut calldata = Vec::with_capacity(4 + constructor_calldata.len());
    calldata.push(class_hash);
    calldata.push(salt);
    // unique = false: the address is independent of the deploying account
    calldata.push(Felt::ZERO);
    calldata.push(Felt::from(constructor_calldata.len() as u64));
    calldata.extend_from_slice(constructor_calldata);
    ContractCall::new(deployer, ENTRYPOINT_DEPLOY_CONTRACT, calldata)
}
