//! Production implementations of the collaborator traits.
//!
//! This module provides the "real" implementations of the traits defined
//! in [`crate::traits`] that interact with an actual Starknet network
//! through the `starknet` crate: account-backed submission, JSON-RPC
//! status polling, read-only calls, and the system clock.
//!
//! Users building applications will typically use these providers, while
//! test code will use the fakes in [`crate::testing`].

mod clock;
mod starknet;

pub use self::clock::TokioClock;
pub use self::starknet::{
    deploy_account, provision_account, AccountSubmitter, ProvisionedAccount, RpcCaller,
    RpcStatusSource,
};
