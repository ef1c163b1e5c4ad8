//! Configuration for confirmation polling and the RPC endpoint.

use url::Url;

use crate::error::{Erc721Error, Result};

/// Configuration for transaction confirmation polling.
///
/// Controls how the lifecycle tracker polls the status source for a
/// terminal state. Use the builder methods to customize, or the preset for
/// local development networks.
///
/// # Examples
///
/// ```rust
/// use starknet_erc721_rs::ConfirmationConfig;
///
/// // Use defaults (60 attempts, 5 second intervals)
/// let config = ConfirmationConfig::default();
///
/// // Customize polling behavior
/// let config = ConfirmationConfig::default()
///     .with_max_attempts(20)
///     .with_poll_interval_secs(10);
///
/// // Use preset for local devnets (20 attempts, 1 second intervals)
/// let config = ConfirmationConfig::devnet();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationConfig {
    /// Maximum number of status polls before giving up.
    pub max_attempts: u32,
    /// Seconds to wait between polls.
    pub poll_interval_secs: u64,
}

impl Default for ConfirmationConfig {
    /// Creates a default configuration suitable for public networks.
    ///
    /// - `max_attempts`: 60
    /// - `poll_interval_secs`: 5
    ///
    /// This results in a maximum wait of ~5 minutes, which accommodates the
    /// typical seconds-to-a-minute L2 acceptance time with ample headroom.
    fn default() -> Self {
        Self {
            max_attempts: 60,
            poll_interval_secs: 5,
        }
    }
}

impl ConfirmationConfig {
    /// Creates a configuration optimized for local devnets, where
    /// transactions are accepted near-instantly.
    pub fn devnet() -> Self {
        Self {
            max_attempts: 20,
            poll_interval_secs: 1,
        }
    }

    /// Sets the maximum number of polling attempts.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the interval between polls in seconds.
    pub fn with_poll_interval_secs(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    /// Returns the total maximum wait time in seconds,
    /// `max_attempts * poll_interval_secs`.
    pub fn total_timeout_secs(&self) -> u64 {
        self.max_attempts as u64 * self.poll_interval_secs
    }
}

/// RPC endpoint configuration for the network collaborators.
///
/// Replaces any implicit process-wide default client: the endpoint is
/// resolved once, explicitly, and handed to the providers at construction
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    pub endpoint: Url,
}

impl RpcConfig {
    /// Environment variable holding the RPC endpoint URL.
    pub const ENDPOINT_VAR: &'static str = "STARKNET_PROVIDER_BASE_URL";

    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }

    /// Reads the endpoint from [`Self::ENDPOINT_VAR`], loading a `.env`
    /// file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns [`Erc721Error::InvalidConfig`] if the variable is unset or
    /// does not parse as a URL.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let raw = std::env::var(Self::ENDPOINT_VAR).map_err(|_| {
            Erc721Error::InvalidConfig(format!("{} is not set", Self::ENDPOINT_VAR))
        })?;
        let endpoint = Url::parse(&raw).map_err(|e| {
            Erc721Error::InvalidConfig(format!("{}: {e}", Self::ENDPOINT_VAR))
        })?;
        Ok(Self { endpoint })
    }
}
